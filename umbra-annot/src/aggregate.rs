//! Pooling annotation categories into one aggregate coverage number.

use crate::coverage::interval_coverage;
use crate::patterns::IgnorePatterns;
use std::collections::BTreeMap;
use umbra_core::{AnnotationSet, Category, Interval, UmbraError, UmbraResult};

/// Categories pooled into full coverage, and whether placeholder-labelled
/// groups are left out of the pool for that category.
const POOLED: [(Category, bool); 4] = [
    (Category::CoiledCoil, false),
    (Category::Disorder, false),
    (Category::Family, true),
    (Category::Domain, true),
];

/// Geometric union of an interval collection: sort by start, fold any
/// interval starting at or before the current run's end into that run.
///
/// Unlike the per-category merger this carries no labels and no tie-break.
pub fn disjoint_merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut runs: Vec<Interval> = Vec::new();
    for interval in sorted {
        match runs.last_mut() {
            Some(run) if interval.start() <= run.end() => *run = run.bounding_union(interval),
            _ => runs.push(interval),
        }
    }
    runs
}

/// Percent of the sequence explained by the union of all retained
/// annotation categories.
///
/// Missing categories contribute nothing; a sequence with no pooled
/// category at all has full coverage `0`, not NaN.
pub fn full_coverage(
    sets: &BTreeMap<Category, AnnotationSet>,
    length: u32,
    ignore: &IgnorePatterns,
) -> UmbraResult<f64> {
    if length == 0 {
        return Err(UmbraError::InvalidLength(length));
    }

    let mut pooled: Vec<Interval> = Vec::new();
    for (category, exclude_placeholder) in POOLED {
        let Some(set) = sets.get(&category) else {
            continue;
        };
        for group in set.groups() {
            if exclude_placeholder
                && group
                    .label
                    .as_deref()
                    .is_some_and(|label| ignore.matches(label))
            {
                continue;
            }
            pooled.extend(group.intervals.iter().copied());
        }
    }

    if pooled.is_empty() {
        return Ok(0.0);
    }
    interval_coverage(&disjoint_merge(&pooled), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use umbra_core::Annotation;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    fn set(entries: Vec<(Option<&str>, Vec<Interval>)>) -> AnnotationSet {
        AnnotationSet::new(
            entries
                .into_iter()
                .map(|(label, intervals)| Annotation::new(label.map(String::from), intervals))
                .collect(),
        )
    }

    #[test]
    fn test_disjoint_merge_folds_runs() {
        let runs = disjoint_merge(&[iv(20, 30), iv(1, 10), iv(8, 15), iv(30, 40)]);
        assert_eq!(runs, vec![iv(1, 15), iv(20, 40)]);
    }

    #[test]
    fn test_disjoint_merge_joins_at_touching_endpoint() {
        // start at or before the run's end folds in, so touching runs join
        let runs = disjoint_merge(&[iv(1, 5), iv(5, 10)]);
        assert_eq!(runs, vec![iv(1, 10)]);
    }

    #[test]
    fn test_disjoint_merge_contained_interval_is_absorbed() {
        let runs = disjoint_merge(&[iv(1, 20), iv(5, 10)]);
        assert_eq!(runs, vec![iv(1, 20)]);
    }

    #[test]
    fn test_full_coverage_pools_categories() {
        let mut sets = BTreeMap::new();
        sets.insert(Category::CoiledCoil, set(vec![(None, vec![iv(1, 11)])]));
        sets.insert(Category::Disorder, set(vec![(None, vec![iv(5, 21)])]));
        sets.insert(
            Category::Domain,
            set(vec![(Some("Kinase_domain"), vec![iv(50, 70)])]),
        );

        // union 1..21 plus 50..70 = 40 of 100
        let coverage = full_coverage(&sets, 100, &IgnorePatterns::default()).unwrap();
        assert_eq!(coverage, 40.0);
    }

    #[test]
    fn test_full_coverage_excludes_placeholders_from_pooled_domains() {
        let mut sets = BTreeMap::new();
        sets.insert(
            Category::Domain,
            set(vec![
                (Some("Kinase_domain"), vec![iv(10, 30)]),
                (Some("DUF1234"), vec![iv(40, 80)]),
            ]),
        );
        sets.insert(
            Category::Family,
            set(vec![(Some("Putative chain"), vec![iv(1, 90)])]),
        );

        let coverage = full_coverage(&sets, 100, &IgnorePatterns::default()).unwrap();
        assert_eq!(coverage, 20.0);
    }

    #[test]
    fn test_flag_categories_do_not_pool() {
        let mut sets = BTreeMap::new();
        sets.insert(Category::Transmembrane, set(vec![(None, vec![iv(1, 50)])]));
        sets.insert(Category::SignalPeptide, set(vec![(None, vec![iv(1, 20)])]));

        let coverage = full_coverage(&sets, 100, &IgnorePatterns::default()).unwrap();
        assert_eq!(coverage, 0.0);
    }

    #[test]
    fn test_absent_everything_is_zero_not_nan() {
        let coverage =
            full_coverage(&BTreeMap::new(), 100, &IgnorePatterns::default()).unwrap();
        assert_eq!(coverage, 0.0);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let err = full_coverage(&BTreeMap::new(), 0, &IgnorePatterns::default()).unwrap_err();
        assert!(matches!(err, UmbraError::InvalidLength(0)));
    }
}
