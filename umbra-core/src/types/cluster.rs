use super::CoverageRecord;
use serde::{Deserialize, Serialize};

/// Which lookup store a cluster member was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreId {
    Primary,
    Secondary,
}

/// Input document for the cluster pass: a cluster accession and the
/// accessions of its near-duplicate member sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub accession: String,
    pub members: Vec<String>,
}

/// A cluster member resolved from one of the two lookup stores, carrying
/// its precomputed coverage record and structural flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterMember {
    pub accession: String,
    pub store: StoreId,
    pub coverage: CoverageRecord,
    pub is_transmembrane: bool,
    pub has_signal_peptide: bool,
}

/// Reference to one member's predicted-structure model set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRef {
    pub accession: String,
    pub residues: u32,
}

/// Read-only output of cluster aggregation: the least-dark member, flag
/// aggregates over all members, and the best/worst predicted-structure
/// references when structure data was available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativeResult {
    pub representative: Option<String>,
    pub full_coverage: f64,
    pub is_transmembrane: bool,
    pub has_signal_peptide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_structure: Option<StructureRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_structure: Option<StructureRef>,
}
