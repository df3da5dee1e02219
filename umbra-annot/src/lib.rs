//! Interval digestion and coverage engine
//!
//! Consolidates overlapping positional annotations into non-overlapping
//! sets, computes percent-of-sequence coverage per category, and pools
//! categories into the aggregate "full coverage" that drives darkness
//! profiling. Upstream format readers feed this crate pre-parsed
//! `(label, start, end)` tuples; nothing in here touches file syntax.

pub mod aggregate;
pub mod coverage;
pub mod digest;
pub mod extract;
pub mod merge;
pub mod patterns;
pub mod profile;

pub use aggregate::{disjoint_merge, full_coverage};
pub use coverage::{annotation_coverage, interval_coverage};
pub use digest::digest;
pub use extract::{
    default_extractors, ChainExtractor, Extractor, Feature, PositionalExtractor, SequenceEntry,
    SignatureExtractor,
};
pub use merge::merge_intervals;
pub use patterns::IgnorePatterns;
pub use profile::coverage_record;
