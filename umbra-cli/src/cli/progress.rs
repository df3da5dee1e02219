//! Progress rendering, memory probing and checkpoint persistence.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::info;
use umbra_core::UmbraResult;
use umbra_pipeline::ProgressObserver;
use umbra_store::{CheckpointWriter, MemoryStore};

/// RSS probe for the current process. An explicit object handed to whoever
/// reports progress, never a process-wide handle.
pub struct MemoryProbe {
    system: System,
    pid: Pid,
}

impl MemoryProbe {
    pub fn current() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(Self {
            system: System::new(),
            pid,
        })
    }

    pub fn rss_gb(&mut self) -> f64 {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.system
            .process(self.pid)
            .map(|process| process.memory() as f64 / (1024.0 * 1024.0 * 1024.0))
            .unwrap_or(0.0)
    }
}

/// Observer wiring a pipeline run to a spinner, periodic RSS log lines and
/// checkpoint snapshots.
pub struct RunObserver<'a> {
    label: &'static str,
    bar: ProgressBar,
    probe: Mutex<Option<MemoryProbe>>,
    checkpoint: Option<(&'a CheckpointWriter, &'a MemoryStore)>,
}

impl<'a> RunObserver<'a> {
    pub fn new(label: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg} ({pos} entries)")
                .expect("valid progress template"),
        );
        Self {
            label,
            bar,
            probe: Mutex::new(MemoryProbe::current()),
            checkpoint: None,
        }
    }

    pub fn with_checkpoint(mut self, writer: &'a CheckpointWriter, store: &'a MemoryStore) -> Self {
        self.checkpoint = Some((writer, store));
        self
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for RunObserver<'_> {
    fn on_entry(&self, processed: u64, accession: &str) {
        self.bar.set_position(processed);
        self.bar.set_message(format!("{}: {}", self.label, accession));
    }

    fn on_progress(&self, processed: u64, stored: u64) {
        let rss_gb = self
            .probe
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_mut()
            .map(|probe| probe.rss_gb());

        match rss_gb {
            Some(rss_gb) => {
                info!(label = self.label, processed, stored, rss_gb, "progress")
            }
            None => info!(label = self.label, processed, stored, "progress"),
        }
    }

    fn on_checkpoint(&self, processed: u64, batch: &[String]) -> UmbraResult<()> {
        if let Some((writer, store)) = self.checkpoint {
            writer.snapshot(processed, store, batch)?;
        }
        Ok(())
    }
}
