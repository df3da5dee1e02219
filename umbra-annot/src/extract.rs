//! Category extraction over pre-parsed sequence entries.
//!
//! Upstream readers hand the engine one `SequenceEntry` per sequence; each
//! registered `Extractor` pulls its own category out of the entry's feature
//! list and decides how that category is digested. One polymorphic seam
//! replaces per-format extraction code.

use crate::digest::digest;
use crate::merge::merge_intervals;
use crate::patterns::IgnorePatterns;
use serde::{Deserialize, Serialize};
use umbra_core::{Annotation, AnnotationSet, Category, DigestConfig, Interval};

/// A pre-parsed positional feature of one sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub interval: Interval,
}

/// Pre-parsed input for one sequence: what the upstream format readers
/// feed the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceEntry {
    pub accession: String,
    pub length: u32,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl SequenceEntry {
    pub fn has_category(&self, category: Category) -> bool {
        self.features
            .iter()
            .any(|feature| feature.category == category)
    }

    fn features_of(&self, category: Category) -> impl Iterator<Item = &Feature> + '_ {
        self.features
            .iter()
            .filter(move |feature| feature.category == category)
    }
}

/// Extracts one annotation category from a pre-parsed entry.
///
/// Returns `None` when the entry carries no features for the category —
/// downstream that is an absent category, distinct from a present-but-empty
/// set left over after placeholder exclusion.
pub trait Extractor: Send + Sync {
    fn category(&self) -> Category;
    fn extract(&self, entry: &SequenceEntry) -> Option<AnnotationSet>;
}

/// Positional categories (coiled coil, disorder, transmembrane, signal
/// peptide): intervals are kept as reported, unlabelled and unmerged.
pub struct PositionalExtractor {
    category: Category,
}

impl PositionalExtractor {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Extractor for PositionalExtractor {
    fn category(&self) -> Category {
        self.category
    }

    fn extract(&self, entry: &SequenceEntry) -> Option<AnnotationSet> {
        let intervals: Vec<Interval> = entry
            .features_of(self.category)
            .map(|feature| feature.interval)
            .collect();
        if intervals.is_empty() {
            return None;
        }
        Some(AnnotationSet::new(vec![Annotation::new(None, intervals)]))
    }
}

/// Labelled chain/family features: one group per feature, labels kept,
/// no merging.
pub struct ChainExtractor;

impl Extractor for ChainExtractor {
    fn category(&self) -> Category {
        Category::Family
    }

    fn extract(&self, entry: &SequenceEntry) -> Option<AnnotationSet> {
        let groups: Vec<Annotation> = entry
            .features_of(Category::Family)
            .map(|feature| Annotation::new(feature.label.clone(), vec![feature.interval]))
            .collect();
        if groups.is_empty() {
            return None;
        }
        Some(AnnotationSet::new(groups))
    }
}

/// Domain signature matches: the full merge (overlap folding plus label
/// tie-break) followed by digestion under the configured policy.
pub struct SignatureExtractor {
    simplify: bool,
    exclude_placeholder: bool,
    ignore: IgnorePatterns,
}

impl SignatureExtractor {
    pub fn new(simplify: bool, exclude_placeholder: bool, ignore: IgnorePatterns) -> Self {
        Self {
            simplify,
            exclude_placeholder,
            ignore,
        }
    }
}

impl From<&DigestConfig> for SignatureExtractor {
    fn from(config: &DigestConfig) -> Self {
        Self::new(
            config.simplify,
            config.exclude_placeholder,
            IgnorePatterns::from(config),
        )
    }
}

impl Extractor for SignatureExtractor {
    fn category(&self) -> Category {
        Category::Domain
    }

    fn extract(&self, entry: &SequenceEntry) -> Option<AnnotationSet> {
        let entries: Vec<(String, Interval)> = entry
            .features_of(Category::Domain)
            .map(|feature| {
                (
                    feature.label.clone().unwrap_or_default(),
                    feature.interval,
                )
            })
            .collect();
        if entries.is_empty() {
            return None;
        }
        let merged = merge_intervals(entries, &self.ignore);
        Some(digest(
            merged,
            self.simplify,
            self.exclude_placeholder,
            &self.ignore,
        ))
    }
}

/// The standard extractor battery, one per tracked category.
pub fn default_extractors(config: &DigestConfig) -> Vec<Box<dyn Extractor>> {
    vec![
        Box::new(PositionalExtractor::new(Category::CoiledCoil)),
        Box::new(PositionalExtractor::new(Category::Disorder)),
        Box::new(PositionalExtractor::new(Category::Transmembrane)),
        Box::new(PositionalExtractor::new(Category::SignalPeptide)),
        Box::new(ChainExtractor),
        Box::new(SignatureExtractor::from(config)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn feature(category: Category, label: Option<&str>, start: u32, end: u32) -> Feature {
        Feature {
            category,
            label: label.map(String::from),
            interval: iv(start, end),
        }
    }

    fn entry(features: Vec<Feature>) -> SequenceEntry {
        SequenceEntry {
            accession: "P12345".to_string(),
            length: 100,
            features,
        }
    }

    #[test]
    fn test_positional_extractor_keeps_raw_intervals() {
        let entry = entry(vec![
            feature(Category::CoiledCoil, None, 10, 30),
            feature(Category::CoiledCoil, None, 20, 40),
            feature(Category::Disorder, None, 50, 60),
        ]);

        let set = PositionalExtractor::new(Category::CoiledCoil)
            .extract(&entry)
            .unwrap();
        // overlapping positional intervals are reported as-is, not merged
        assert_eq!(set.len(), 1);
        assert_eq!(set.groups()[0].intervals, vec![iv(10, 30), iv(20, 40)]);
        assert!(set.groups()[0].label.is_none());
    }

    #[test]
    fn test_positional_extractor_absent_category() {
        let entry = entry(vec![feature(Category::Disorder, None, 1, 10)]);
        assert!(PositionalExtractor::new(Category::CoiledCoil)
            .extract(&entry)
            .is_none());
    }

    #[test]
    fn test_chain_extractor_keeps_labels() {
        let entry = entry(vec![
            feature(Category::Family, Some("Hemoglobin alpha"), 1, 140),
            feature(Category::Family, Some("Putative chain"), 1, 140),
        ]);

        let set = ChainExtractor.extract(&entry).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.groups()[0].label.as_deref(), Some("Hemoglobin alpha"));
    }

    #[test]
    fn test_signature_extractor_merges_and_tiebreaks() {
        let entry = entry(vec![
            feature(Category::Domain, Some("DUF1234"), 10, 30),
            feature(Category::Domain, Some("Kinase_domain"), 15, 20),
        ]);

        let extractor = SignatureExtractor::new(false, false, IgnorePatterns::default());
        let set = extractor.extract(&entry).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.groups()[0].label.as_deref(), Some("Kinase_domain"));
        assert_eq!(set.groups()[0].intervals, vec![iv(10, 30)]);
    }

    #[test]
    fn test_signature_extractor_exclusion_leaves_empty_set() {
        let entry = entry(vec![feature(Category::Domain, Some("DUF1234"), 10, 30)]);

        let extractor = SignatureExtractor::new(false, true, IgnorePatterns::default());
        let set = extractor.extract(&entry).unwrap();
        // present but empty: distinct from the absent-category None
        assert!(set.is_empty());
    }

    #[test]
    fn test_default_extractors_cover_all_categories() {
        let extractors = default_extractors(&DigestConfig::default());
        let mut categories: Vec<Category> = extractors.iter().map(|e| e.category()).collect();
        categories.sort();
        let mut expected = Category::ALL.to_vec();
        expected.sort();
        assert_eq!(categories, expected);
    }
}
