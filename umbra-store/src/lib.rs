//! Record-store boundary for Umbra
//!
//! A synchronous key-value view over per-accession documents, an in-memory
//! backend holding compressed JSON blobs, and checkpoint/resume snapshots.
//! The engine never batches writes, builds indexes, or manages connections
//! through this boundary; those belong to whatever adapter backs it.

pub mod checkpoint;
pub mod memory;
pub mod store;

pub use checkpoint::{CheckpointReader, CheckpointWriter};
pub use memory::MemoryStore;
pub use store::RecordStore;
