use serde::de::DeserializeOwned;
use serde::Serialize;
use umbra_core::UmbraResult;

/// Synchronous key-value access to per-accession documents.
///
/// Lookup misses are `Ok(None)` / silently absent from `get_many`; only
/// storage faults and undecodable documents are errors. Callers own any
/// retry or timeout policy.
pub trait RecordStore<R>
where
    R: Serialize + DeserializeOwned,
{
    fn get(&self, accession: &str) -> UmbraResult<Option<R>>;

    /// Fetch several records, preserving request order and skipping
    /// accessions the store does not hold.
    fn get_many(&self, accessions: &[String]) -> UmbraResult<Vec<(String, R)>>;

    fn put(&self, accession: &str, record: &R) -> UmbraResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, accession: &str) -> bool;
}
