//! Core types, errors and configuration shared across all Umbra crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{UmbraError, UmbraResult};
pub use config::{load_config, save_config, Config, DigestConfig, PipelineConfig};

// Re-export core types
pub use types::{
    Annotation, AnnotationSet, Category, ClusterEntry, ClusterMember, CoverageRecord, Interval,
    RepresentativeResult, SequenceRecord, StoreId, StructureFragment, StructureRecord,
    StructureRef,
};

/// Version information for the Umbra project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
