use umbra_core::UmbraResult;

/// Progress reporting boundary for pipeline runs.
///
/// The driver announces what happened; the observer owns rendering,
/// logging, memory probing and checkpoint persistence. Passing the
/// observer in explicitly keeps the engine free of process-wide state.
pub trait ProgressObserver: Sync {
    /// Called once per consumed entry.
    fn on_entry(&self, _processed: u64, _accession: &str) {}

    /// Called every `progress_every` consumed entries and once at the end.
    fn on_progress(&self, _processed: u64, _stored: u64) {}

    /// Called every `checkpoint_every` stored entries and once at the end,
    /// with the accessions committed since the previous checkpoint. A
    /// failed checkpoint aborts the run rather than being papered over.
    fn on_checkpoint(&self, _processed: u64, _batch: &[String]) -> UmbraResult<()> {
        Ok(())
    }
}

/// Observer that ignores everything; the default for embedded use.
pub struct NullObserver;

impl ProgressObserver for NullObserver {}
