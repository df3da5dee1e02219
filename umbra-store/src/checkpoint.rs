//! Checkpoint/resume serialization for long extraction runs.
//!
//! A checkpoint is a gzipped JSON snapshot of the store
//! (`{name}_{processed}.json.gz`) plus an appending `{name}.INDEX` sidecar
//! listing which accessions were committed by which snapshot. Resume reads
//! the sidecar and skips completed accessions.

use crate::memory::MemoryStore;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use umbra_core::{UmbraError, UmbraResult};

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    created: DateTime<Utc>,
    processed: u64,
    records: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug)]
pub struct CheckpointWriter {
    directory: PathBuf,
    name: String,
}

impl CheckpointWriter {
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> UmbraResult<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory)?;
        Ok(Self {
            directory,
            name: name.into(),
        })
    }

    /// Write a full snapshot of the store and append the accessions newly
    /// committed since the previous snapshot to the index sidecar.
    pub fn snapshot(
        &self,
        processed: u64,
        store: &MemoryStore,
        new_accessions: &[String],
    ) -> UmbraResult<PathBuf> {
        let path = self
            .directory
            .join(format!("{}_{}.json.gz", self.name, processed));
        info!(path = %path.display(), processed, "saving checkpoint");

        let snapshot = Snapshot {
            created: Utc::now(),
            processed,
            records: store.export()?,
        };

        let file = File::create(&path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, &snapshot)?;
        encoder.finish()?.flush()?;

        self.append_index(processed, new_accessions)?;
        Ok(path)
    }

    fn append_index(&self, processed: u64, accessions: &[String]) -> UmbraResult<()> {
        let path = self.index_path();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        for accession in accessions {
            writeln!(writer, "{}\t{}", accession, processed)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn index_path(&self) -> PathBuf {
        self.directory.join(format!("{}.INDEX", self.name))
    }
}

#[derive(Debug)]
pub struct CheckpointReader {
    directory: PathBuf,
    name: String,
}

impl CheckpointReader {
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }

    /// Accessions already committed by earlier runs. A missing sidecar
    /// means a fresh run, not an error.
    pub fn completed(&self) -> UmbraResult<HashSet<String>> {
        let path = self.directory.join(format!("{}.INDEX", self.name));
        if !path.exists() {
            return Ok(HashSet::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut completed = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some((accession, _)) = line.split_once('\t') {
                completed.insert(accession.to_string());
            }
        }
        Ok(completed)
    }

    /// Path of the snapshot with the highest processed count, if any.
    pub fn latest_snapshot(&self) -> UmbraResult<Option<PathBuf>> {
        let prefix = format!("{}_", self.name);
        let mut latest: Option<(u64, PathBuf)> = None;

        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = file_name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".json.gz"))
            else {
                continue;
            };
            let Ok(processed) = stem.parse::<u64>() else {
                continue;
            };
            if latest.as_ref().is_none_or(|(best, _)| processed > *best) {
                latest = Some((processed, path));
            }
        }
        Ok(latest.map(|(_, path)| path))
    }

    /// Load a snapshot file back into a fresh in-memory store.
    pub fn load_snapshot(path: &Path) -> UmbraResult<(u64, MemoryStore)> {
        let file = File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let snapshot: Snapshot = serde_json::from_reader(decoder)
            .map_err(|e| UmbraError::Storage(format!("unreadable snapshot: {}", e)))?;

        let store = MemoryStore::new();
        store.import(&snapshot.records)?;
        Ok((snapshot.processed, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;
    use pretty_assertions::assert_eq;
    use umbra_core::{CoverageRecord, SequenceRecord};

    fn record(accession: &str) -> SequenceRecord {
        SequenceRecord {
            accession: accession.to_string(),
            length: 100,
            coverage: CoverageRecord::default(),
            is_transmembrane: false,
            has_signal_peptide: false,
            annotations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_snapshot_and_resume_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path(), "sequences").unwrap();

        let store = MemoryStore::new();
        store.put("P11111", &record("P11111")).unwrap();
        store.put("P22222", &record("P22222")).unwrap();

        let path = writer
            .snapshot(2, &store, &["P11111".to_string(), "P22222".to_string()])
            .unwrap();
        assert!(path.exists());

        let reader = CheckpointReader::new(dir.path(), "sequences");
        let completed = reader.completed().unwrap();
        assert!(completed.contains("P11111"));
        assert!(completed.contains("P22222"));

        let (processed, restored) = CheckpointReader::load_snapshot(&path).unwrap();
        assert_eq!(processed, 2);
        assert_eq!(RecordStore::<SequenceRecord>::len(&restored), 2);
    }

    #[test]
    fn test_index_accumulates_across_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let writer = CheckpointWriter::new(dir.path(), "sequences").unwrap();
        let store = MemoryStore::new();

        store.put("P11111", &record("P11111")).unwrap();
        writer
            .snapshot(1, &store, &["P11111".to_string()])
            .unwrap();

        store.put("P22222", &record("P22222")).unwrap();
        writer
            .snapshot(2, &store, &["P22222".to_string()])
            .unwrap();

        let reader = CheckpointReader::new(dir.path(), "sequences");
        assert_eq!(reader.completed().unwrap().len(), 2);

        let latest = reader.latest_snapshot().unwrap().unwrap();
        assert!(latest.to_string_lossy().contains("sequences_2"));
    }

    #[test]
    fn test_missing_index_means_fresh_run() {
        let dir = tempfile::tempdir().unwrap();
        let reader = CheckpointReader::new(dir.path(), "sequences");
        assert!(reader.completed().unwrap().is_empty());
    }
}
