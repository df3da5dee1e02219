use crate::store::RecordStore;
use dashmap::DashMap;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use umbra_core::{UmbraError, UmbraResult};

/// In-memory record store holding gzip-compressed JSON documents.
///
/// The store itself is schemaless; typed decoding happens on read, and a
/// document that does not match the requested shape surfaces
/// `InconsistentAnnotationShape` instead of being silently recomputed.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an untyped document, as a schemaless adapter would.
    pub fn put_value(&self, accession: &str, value: &serde_json::Value) -> UmbraResult<()> {
        let blob = encode(value)?;
        self.records.insert(accession.to_string(), blob);
        Ok(())
    }

    pub fn accessions(&self) -> Vec<String> {
        self.records.iter().map(|e| e.key().clone()).collect()
    }

    // Inherent counterparts of the trait accessors, callable without
    // pinning a record type on the schemaless store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, accession: &str) -> bool {
        self.records.contains_key(accession)
    }

    /// Decode every document into its raw JSON value, for snapshotting.
    pub fn export(&self) -> UmbraResult<BTreeMap<String, serde_json::Value>> {
        let mut out = BTreeMap::new();
        for entry in self.records.iter() {
            let value: serde_json::Value = decode(entry.key(), entry.value())?;
            out.insert(entry.key().clone(), value);
        }
        Ok(out)
    }

    /// Load raw JSON documents, replacing any existing entries.
    pub fn import(&self, records: &BTreeMap<String, serde_json::Value>) -> UmbraResult<()> {
        for (accession, value) in records {
            self.put_value(accession, value)?;
        }
        Ok(())
    }
}

impl<R> RecordStore<R> for MemoryStore
where
    R: Serialize + DeserializeOwned,
{
    fn get(&self, accession: &str) -> UmbraResult<Option<R>> {
        match self.records.get(accession) {
            Some(blob) => Ok(Some(decode(accession, blob.value())?)),
            None => Ok(None),
        }
    }

    fn get_many(&self, accessions: &[String]) -> UmbraResult<Vec<(String, R)>> {
        let mut found = Vec::new();
        for accession in accessions {
            if let Some(blob) = self.records.get(accession.as_str()) {
                found.push((accession.clone(), decode(accession, blob.value())?));
            }
        }
        Ok(found)
    }

    fn put(&self, accession: &str, record: &R) -> UmbraResult<()> {
        let blob = encode(record)?;
        self.records.insert(accession.to_string(), blob);
        Ok(())
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, accession: &str) -> bool {
        self.records.contains_key(accession)
    }
}

fn encode<R: Serialize>(record: &R) -> UmbraResult<Vec<u8>> {
    let json = serde_json::to_vec(record)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    Ok(encoder.finish()?)
}

fn decode<R: DeserializeOwned>(accession: &str, blob: &[u8]) -> UmbraResult<R> {
    let mut decoder = GzDecoder::new(blob);
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| UmbraError::Storage(format!("corrupt document for {}: {}", accession, e)))?;
    let value: serde_json::Value =
        serde_json::from_slice(&json).map_err(|e| UmbraError::Serialization(e.to_string()))?;
    serde_json::from_value(value)
        .map_err(|e| UmbraError::InconsistentAnnotationShape(format!("{}: {}", accession, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use umbra_core::{CoverageRecord, SequenceRecord};

    fn record(accession: &str, full: f64) -> SequenceRecord {
        SequenceRecord {
            accession: accession.to_string(),
            length: 100,
            coverage: CoverageRecord {
                full,
                ..CoverageRecord::default()
            },
            is_transmembrane: false,
            has_signal_peptide: false,
            annotations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_put_get_round_trip() {
        let store = MemoryStore::new();
        store.put("P12345", &record("P12345", 55.5)).unwrap();

        let loaded: SequenceRecord = store.get("P12345").unwrap().unwrap();
        assert_eq!(loaded.coverage.full, 55.5);
        assert!(loaded.coverage.disorder.is_nan());

        let missing: Option<SequenceRecord> = store.get("Q00000").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_get_many_preserves_order_and_skips_misses() {
        let store = MemoryStore::new();
        store.put("B1", &record("B1", 10.0)).unwrap();
        store.put("A1", &record("A1", 20.0)).unwrap();

        let request = vec!["A1".to_string(), "MISSING".to_string(), "B1".to_string()];
        let found: Vec<(String, SequenceRecord)> = store.get_many(&request).unwrap();

        let order: Vec<&str> = found.iter().map(|(ac, _)| ac.as_str()).collect();
        assert_eq!(order, vec!["A1", "B1"]);
    }

    #[test]
    fn test_wrong_shape_surfaces_typed_error() {
        let store = MemoryStore::new();
        store
            .put_value("P12345", &serde_json::json!({"unexpected": true}))
            .unwrap();

        let err = RecordStore::<SequenceRecord>::get(&store, "P12345").unwrap_err();
        assert!(matches!(err, UmbraError::InconsistentAnnotationShape(_)));
    }

    #[test]
    fn test_export_import_round_trip() {
        let store = MemoryStore::new();
        store.put("P12345", &record("P12345", 42.0)).unwrap();
        let exported = store.export().unwrap();

        let restored = MemoryStore::new();
        restored.import(&exported).unwrap();
        let loaded: SequenceRecord = restored.get("P12345").unwrap().unwrap();
        assert_eq!(loaded.coverage.full, 42.0);
        assert_eq!(RecordStore::<SequenceRecord>::len(&restored), 1);
    }
}
