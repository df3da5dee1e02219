//! Percent-of-length coverage for interval collections.

use crate::patterns::IgnorePatterns;
use umbra_core::{AnnotationSet, Interval, UmbraError, UmbraResult};

/// Coverage of a bare interval collection, percent of `length`, rounded to
/// two decimals. An empty collection covers `0.00`.
pub fn interval_coverage(intervals: &[Interval], length: u32) -> UmbraResult<f64> {
    check_length(length)?;
    let covered: u64 = intervals
        .iter()
        .map(|interval| u64::from(interval.length()))
        .sum();
    Ok(percent(covered, length))
}

/// Coverage of a digested annotation set. With `exclude_placeholder`,
/// placeholder-labelled groups are left out of the sum; anonymous
/// (simplified) groups always count.
pub fn annotation_coverage(
    set: &AnnotationSet,
    length: u32,
    exclude_placeholder: bool,
    ignore: &IgnorePatterns,
) -> UmbraResult<f64> {
    check_length(length)?;
    let covered: u64 = set
        .groups()
        .iter()
        .filter(|group| {
            !(exclude_placeholder
                && group
                    .label
                    .as_deref()
                    .is_some_and(|label| ignore.matches(label)))
        })
        .map(|group| group.covered())
        .sum();
    Ok(percent(covered, length))
}

fn check_length(length: u32) -> UmbraResult<()> {
    if length == 0 {
        return Err(UmbraError::InvalidLength(length));
    }
    Ok(())
}

fn percent(covered: u64, length: u32) -> f64 {
    round2(covered as f64 * 100.0 / f64::from(length))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
