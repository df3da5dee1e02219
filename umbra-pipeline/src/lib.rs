//! Stream-processing drivers for Umbra
//!
//! Sequential per-entry digestion over pre-parsed sequence streams, the
//! domain-source digestion that fills the domain store, and the cluster
//! pass. Progress and checkpointing flow through explicit observer
//! objects owned by the caller; nothing here touches process-wide state.

pub mod clusters;
pub mod domains;
pub mod observer;
pub mod sequences;

pub use clusters::ClusterPipeline;
pub use domains::{DomainDigester, DomainRow};
pub use observer::{NullObserver, ProgressObserver};
pub use sequences::{PipelineSummary, SequencePipeline};
