//! Overlap detection and label tie-breaking for one category's interval
//! stream of one sequence.

use crate::patterns::IgnorePatterns;
use umbra_core::Interval;

/// Consolidate a labelled interval stream into non-overlapping entries.
///
/// Intervals are processed strictly in input order against a running
/// accumulator. Every accumulated entry overlapping the incoming interval
/// is removed and folded into it: the interval grows to the bounding union,
/// and the label follows the longer side unless that label is a placeholder.
/// Because the incoming interval grows as it absorbs entries, both the
/// overlap test and the length tie-break see the grown interval.
///
/// The result order is not significant downstream; merging an already
/// merged stream is a no-op.
pub fn merge_intervals<I>(entries: I, ignore: &IgnorePatterns) -> Vec<(String, Interval)>
where
    I: IntoIterator<Item = (String, Interval)>,
{
    let mut accumulated: Vec<(String, Interval)> = Vec::new();
    for (label, interval) in entries {
        fold_into(&mut accumulated, label, interval, ignore);
    }
    accumulated
}

fn fold_into(
    accumulated: &mut Vec<(String, Interval)>,
    mut label: String,
    mut interval: Interval,
    ignore: &IgnorePatterns,
) {
    let mut kept = Vec::with_capacity(accumulated.len() + 1);
    for (existing_label, existing) in accumulated.drain(..) {
        if existing.overlaps(interval) {
            if existing.length() > interval.length() && !ignore.matches(&existing_label) {
                label = existing_label;
            }
            interval = existing.bounding_union(interval);
        } else {
            kept.push((existing_label, existing));
        }
    }
    kept.push((label, interval));
    *accumulated = kept;
}
