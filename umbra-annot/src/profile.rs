//! Assembling the per-sequence coverage record.

use crate::aggregate::full_coverage;
use crate::coverage::annotation_coverage;
use crate::patterns::IgnorePatterns;
use std::collections::BTreeMap;
use umbra_core::{AnnotationSet, Category, CoverageRecord, UmbraResult};

/// Compute the full `CoverageRecord` for one sequence from its digested
/// per-category annotation sets.
///
/// Categories the sequence was never annotated with come out as NaN;
/// everything is derived in one pass with no interim state carried
/// between sequences.
pub fn coverage_record(
    sets: &BTreeMap<Category, AnnotationSet>,
    length: u32,
    ignore: &IgnorePatterns,
) -> UmbraResult<CoverageRecord> {
    let category = |category: Category, exclude_placeholder: bool| -> UmbraResult<f64> {
        match sets.get(&category) {
            Some(set) => annotation_coverage(set, length, exclude_placeholder, ignore),
            None => Ok(f64::NAN),
        }
    };

    Ok(CoverageRecord {
        coiled_coil: category(Category::CoiledCoil, false)?,
        disorder: category(Category::Disorder, false)?,
        domains: category(Category::Domain, false)?,
        domains_informative: category(Category::Domain, true)?,
        families: category(Category::Family, true)?,
        full: full_coverage(sets, length, ignore)?,
    })
}
