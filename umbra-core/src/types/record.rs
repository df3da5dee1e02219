use super::{AnnotationSet, Category, CoverageRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Store document for one digested sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub accession: String,
    pub length: u32,
    pub coverage: CoverageRecord,
    pub is_transmembrane: bool,
    pub has_signal_peptide: bool,
    #[serde(default)]
    pub annotations: BTreeMap<Category, AnnotationSet>,
}

/// One predicted-structure model fragment: mean residue confidence, residue
/// count, and the percent frequency of each confidence category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureFragment {
    pub avg_confidence: f64,
    pub length: u32,
    #[serde(default)]
    pub category_freq: BTreeMap<String, f64>,
}

/// Store document for the predicted-structure models of one sequence.
/// Long sequences are covered by several fragment models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureRecord {
    pub accession: String,
    pub fragments: Vec<StructureFragment>,
}
