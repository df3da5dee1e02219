//! Cluster pass driver.

use crate::observer::{NullObserver, ProgressObserver};
use crate::sequences::PipelineSummary;
use umbra_cluster::ClusterAggregator;
use umbra_core::{ClusterEntry, PipelineConfig, RepresentativeResult, UmbraResult};
use umbra_store::RecordStore;

/// Aggregates an ordered stream of cluster entries and persists each
/// `RepresentativeResult` keyed by cluster accession.
///
/// Every member record must already be committed before its cluster is
/// consumed; there is no waiting on missing members.
pub struct ClusterPipeline<'a> {
    aggregator: ClusterAggregator<'a>,
    results: &'a dyn RecordStore<RepresentativeResult>,
    config: PipelineConfig,
    observer: &'a dyn ProgressObserver,
}

impl<'a> ClusterPipeline<'a> {
    pub fn new(
        aggregator: ClusterAggregator<'a>,
        results: &'a dyn RecordStore<RepresentativeResult>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            aggregator,
            results,
            config: config.clone(),
            observer: &NullObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ProgressObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn run<I>(&self, clusters: I) -> UmbraResult<PipelineSummary>
    where
        I: IntoIterator<Item = ClusterEntry>,
    {
        let mut summary = PipelineSummary::default();

        for cluster in clusters {
            summary.processed += 1;
            // clusters already aggregated by an earlier run stay untouched
            if self.results.contains(&cluster.accession) {
                summary.skipped += 1;
                continue;
            }
            let result = self.aggregator.aggregate(&cluster)?;
            self.results.put(&cluster.accession, &result)?;
            summary.stored += 1;

            self.observer.on_entry(summary.processed, &cluster.accession);
            if self.config.progress_every > 0 && summary.processed % self.config.progress_every == 0
            {
                self.observer.on_progress(summary.processed, summary.stored);
            }
        }

        self.observer.on_progress(summary.processed, summary.stored);
        Ok(summary)
    }
}
