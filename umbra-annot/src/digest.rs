//! Freezing merged intervals into per-label annotation sets.

use crate::patterns::IgnorePatterns;
use indexmap::IndexMap;
use umbra_core::{Annotation, AnnotationSet, Interval};

/// Group a merger's output by distinct final label and freeze the result.
///
/// With `exclude_placeholder`, groups whose label matches an ignore pattern
/// are dropped entirely. With `simplify`, label text is discarded and only
/// the positional groups remain. An input with nothing left yields an empty
/// set, not an error.
pub fn digest(
    merged: Vec<(String, Interval)>,
    simplify: bool,
    exclude_placeholder: bool,
    ignore: &IgnorePatterns,
) -> AnnotationSet {
    let mut groups: IndexMap<String, Vec<Interval>> = IndexMap::new();
    for (label, interval) in merged {
        groups.entry(label).or_default().push(interval);
    }

    groups
        .into_iter()
        .filter(|(label, _)| !(exclude_placeholder && ignore.matches(label)))
        .map(|(label, intervals)| {
            let label = if simplify { None } else { Some(label) };
            Annotation::new(label, intervals)
        })
        .collect()
}
