//! Filling the domain store from a pre-parsed signature-match stream.

use crate::observer::{NullObserver, ProgressObserver};
use crate::sequences::PipelineSummary;
use serde::{Deserialize, Serialize};
use umbra_annot::{digest, merge_intervals, IgnorePatterns};
use umbra_core::{AnnotationSet, DigestConfig, Interval, UmbraResult};
use umbra_store::RecordStore;

/// One pre-parsed row of a domain-source dump: a signature match for one
/// sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRow {
    pub accession: String,
    pub label: String,
    pub interval: Interval,
}

/// Digests an accession-sorted stream of signature matches into per-sequence
/// annotation sets.
///
/// Consecutive rows for the same accession accumulate; when the accession
/// changes, the accumulated matches are merged, digested under the
/// configured policy, and written to the domain store. The stream being
/// accession-sorted is the contract with the upstream dump.
pub struct DomainDigester<'a> {
    store: &'a dyn RecordStore<AnnotationSet>,
    simplify: bool,
    exclude_placeholder: bool,
    ignore: IgnorePatterns,
    observer: &'a dyn ProgressObserver,
}

impl<'a> DomainDigester<'a> {
    pub fn new(store: &'a dyn RecordStore<AnnotationSet>, config: &DigestConfig) -> Self {
        Self {
            store,
            simplify: config.simplify,
            exclude_placeholder: config.exclude_placeholder,
            ignore: IgnorePatterns::from(config),
            observer: &NullObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn run<I>(&self, rows: I) -> UmbraResult<PipelineSummary>
    where
        I: IntoIterator<Item = DomainRow>,
    {
        let mut summary = PipelineSummary::default();
        let mut current: Option<(String, Vec<(String, Interval)>)> = None;

        for row in rows {
            summary.processed += 1;
            match &mut current {
                Some((accession, entries)) if *accession == row.accession => {
                    entries.push((row.label, row.interval));
                }
                _ => {
                    if let Some((accession, entries)) = current.take() {
                        self.flush(&accession, entries)?;
                        summary.stored += 1;
                        self.observer.on_entry(summary.processed, &accession);
                    }
                    current = Some((row.accession, vec![(row.label, row.interval)]));
                }
            }
        }

        if let Some((accession, entries)) = current.take() {
            self.flush(&accession, entries)?;
            summary.stored += 1;
            self.observer.on_entry(summary.processed, &accession);
        }

        self.observer.on_progress(summary.processed, summary.stored);
        Ok(summary)
    }

    fn flush(&self, accession: &str, entries: Vec<(String, Interval)>) -> UmbraResult<()> {
        let merged = merge_intervals(entries, &self.ignore);
        let set = digest(merged, self.simplify, self.exclude_placeholder, &self.ignore);
        self.store.put(accession, &set)
    }
}
