//! Per-sequence digestion driver.

use crate::observer::{NullObserver, ProgressObserver};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;
use umbra_annot::{coverage_record, default_extractors, Extractor, IgnorePatterns, SequenceEntry};
use umbra_core::{
    AnnotationSet, Category, Config, PipelineConfig, SequenceRecord, UmbraResult,
};
use umbra_store::RecordStore;

/// Counters for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub processed: u64,
    pub stored: u64,
    pub skipped: u64,
}

/// Digests an ordered stream of pre-parsed sequence entries into
/// `SequenceRecord`s.
///
/// Each entry runs through the registered extractors, gets its coverage
/// record assembled, and is written through the store boundary. Entries
/// already committed by an earlier run (the resume set) are skipped.
/// Domain annotations fall back to the domain store when an entry carries
/// no inline signature matches.
pub struct SequencePipeline<'a> {
    store: &'a (dyn RecordStore<SequenceRecord> + Sync),
    domain_store: Option<&'a (dyn RecordStore<AnnotationSet> + Sync)>,
    extractors: Vec<Box<dyn Extractor>>,
    ignore: IgnorePatterns,
    config: PipelineConfig,
    observer: &'a dyn ProgressObserver,
    completed: HashSet<String>,
}

impl<'a> SequencePipeline<'a> {
    pub fn new(store: &'a (dyn RecordStore<SequenceRecord> + Sync), config: &Config) -> Self {
        Self {
            store,
            domain_store: None,
            extractors: default_extractors(&config.digest),
            ignore: IgnorePatterns::from(&config.digest),
            config: config.pipeline.clone(),
            observer: &NullObserver,
            completed: HashSet::new(),
        }
    }

    pub fn with_domain_store(
        mut self,
        store: &'a (dyn RecordStore<AnnotationSet> + Sync),
    ) -> Self {
        self.domain_store = Some(store);
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Accessions committed by earlier runs; matching entries are skipped.
    pub fn with_completed(mut self, completed: HashSet<String>) -> Self {
        self.completed = completed;
        self
    }

    /// Replace the extractor battery, mirroring per-source registration.
    pub fn register(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.retain(|e| e.category() != extractor.category());
        self.extractors.push(extractor);
    }

    /// Digest one entry into its record without touching the store.
    pub fn digest_entry(&self, entry: &SequenceEntry) -> UmbraResult<SequenceRecord> {
        let mut sets: BTreeMap<Category, AnnotationSet> = BTreeMap::new();
        for extractor in &self.extractors {
            if let Some(set) = extractor.extract(entry) {
                sets.insert(extractor.category(), set);
            }
        }

        if !sets.contains_key(&Category::Domain) {
            if let Some(domains) = self.domain_store {
                if let Some(set) = domains.get(&entry.accession)? {
                    debug!(accession = %entry.accession, "domain annotations resolved from store");
                    sets.insert(Category::Domain, set);
                }
            }
        }

        let coverage = coverage_record(&sets, entry.length, &self.ignore)?;
        let is_transmembrane = sets.contains_key(&Category::Transmembrane);
        let has_signal_peptide = sets.contains_key(&Category::SignalPeptide);

        Ok(SequenceRecord {
            accession: entry.accession.clone(),
            length: entry.length,
            coverage,
            is_transmembrane,
            has_signal_peptide,
            annotations: sets,
        })
    }

    /// Sequential run over an entry stream.
    pub fn run<I>(&self, entries: I) -> UmbraResult<PipelineSummary>
    where
        I: IntoIterator<Item = SequenceEntry>,
    {
        let mut summary = PipelineSummary::default();
        let mut batch: Vec<String> = Vec::new();

        for entry in entries {
            summary.processed += 1;
            if self.completed.contains(&entry.accession) {
                summary.skipped += 1;
            } else {
                let record = self.digest_entry(&entry)?;
                self.store.put(&record.accession, &record)?;
                summary.stored += 1;
                batch.push(record.accession);
                self.checkpoint_if_due(&summary, &mut batch)?;
            }

            self.observer.on_entry(summary.processed, &entry.accession);
            if self.config.progress_every > 0 && summary.processed % self.config.progress_every == 0
            {
                self.observer.on_progress(summary.processed, summary.stored);
            }
        }

        self.finish(&summary, batch)?;
        Ok(summary)
    }

    /// Digest a batch in parallel, then serialize the store writes.
    /// Per-entry digestion shares no state across entries, so only the
    /// final put order matters.
    pub fn run_parallel(&self, entries: Vec<SequenceEntry>) -> UmbraResult<PipelineSummary> {
        let digested: Vec<UmbraResult<Option<SequenceRecord>>> = entries
            .par_iter()
            .map(|entry| {
                if self.completed.contains(&entry.accession) {
                    Ok(None)
                } else {
                    self.digest_entry(entry).map(Some)
                }
            })
            .collect();

        let mut summary = PipelineSummary::default();
        let mut batch: Vec<String> = Vec::new();
        for (entry, outcome) in entries.iter().zip(digested) {
            summary.processed += 1;
            match outcome? {
                Some(record) => {
                    self.store.put(&record.accession, &record)?;
                    summary.stored += 1;
                    batch.push(record.accession);
                    self.checkpoint_if_due(&summary, &mut batch)?;
                }
                None => summary.skipped += 1,
            }
            self.observer.on_entry(summary.processed, &entry.accession);
        }

        self.finish(&summary, batch)?;
        Ok(summary)
    }

    fn checkpoint_if_due(
        &self,
        summary: &PipelineSummary,
        batch: &mut Vec<String>,
    ) -> UmbraResult<()> {
        if self.config.checkpoint_every > 0 && summary.stored % self.config.checkpoint_every == 0 {
            self.observer.on_checkpoint(summary.processed, batch)?;
            batch.clear();
        }
        Ok(())
    }

    fn finish(&self, summary: &PipelineSummary, batch: Vec<String>) -> UmbraResult<()> {
        if !batch.is_empty() {
            self.observer.on_checkpoint(summary.processed, &batch)?;
        }
        self.observer.on_progress(summary.processed, summary.stored);
        Ok(())
    }
}
