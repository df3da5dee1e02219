use super::Interval;
use serde::{Deserialize, Serialize};

/// One labelled group of merged intervals.
///
/// `label` is `None` only for simplified (anonymized) groups, where the
/// digestion kept positional data but discarded which annotation it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub intervals: Vec<Interval>,
}

impl Annotation {
    pub fn new(label: Option<String>, intervals: Vec<Interval>) -> Self {
        Self { label, intervals }
    }

    /// Total residue span of the group under the `end - start` convention.
    pub fn covered(&self) -> u64 {
        self.intervals
            .iter()
            .map(|interval| u64::from(interval.length()))
            .sum()
    }
}

/// The frozen result of digesting one (sequence, category) annotation
/// stream: one group per distinct final label.
///
/// An empty set is a valid value and distinct from an absent category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSet {
    groups: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn new(groups: Vec<Annotation>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Annotation] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter_intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.intervals.iter().copied())
    }
}

impl FromIterator<Annotation> for AnnotationSet {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_covered_sums_group_lengths() {
        let annotation = Annotation::new(Some("Kinase_domain".into()), vec![iv(10, 30), iv(40, 45)]);
        assert_eq!(annotation.covered(), 25);
    }

    #[test]
    fn test_serde_skips_absent_label() {
        let simplified = Annotation::new(None, vec![iv(1, 5)]);
        let json = serde_json::to_string(&simplified).unwrap();
        assert_eq!(json, r#"{"intervals":[[1,5]]}"#);

        let parsed: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, simplified);
    }

    #[test]
    fn test_set_iter_intervals() {
        let set = AnnotationSet::new(vec![
            Annotation::new(Some("A".into()), vec![iv(1, 5)]),
            Annotation::new(Some("B".into()), vec![iv(10, 20), iv(30, 40)]),
        ]);
        assert_eq!(set.iter_intervals().count(), 3);
        assert!(!set.is_empty());
        assert!(AnnotationSet::default().is_empty());
    }
}
