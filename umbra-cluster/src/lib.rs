//! Cluster aggregation for Umbra
//!
//! Resolves a cluster's member accessions across the two lookup stores,
//! picks the least-dark representative, aggregates structural flags, and
//! attaches best/worst predicted-structure references.

pub mod aggregate;
pub mod representative;

pub use aggregate::ClusterAggregator;
pub use representative::{select_representative, select_structure_extremes};
