//! Resolving cluster members across stores and producing the result.

use crate::representative::{select_representative, select_structure_extremes};
use tracing::warn;
use umbra_core::{
    ClusterEntry, ClusterMember, RepresentativeResult, SequenceRecord, StoreId, StructureRecord,
    UmbraResult,
};
use umbra_store::RecordStore;

/// Aggregates one cluster at a time against the primary and secondary
/// sequence stores, plus an optional predicted-structure store.
///
/// Every member's record must already be committed before the cluster is
/// aggregated; accessions found in neither store are skipped and logged,
/// never fatal, and there is no waiting or retrying for them.
pub struct ClusterAggregator<'a> {
    primary: &'a dyn RecordStore<SequenceRecord>,
    secondary: &'a dyn RecordStore<SequenceRecord>,
    structures: Option<&'a dyn RecordStore<StructureRecord>>,
}

impl<'a> ClusterAggregator<'a> {
    pub fn new(
        primary: &'a dyn RecordStore<SequenceRecord>,
        secondary: &'a dyn RecordStore<SequenceRecord>,
        structures: Option<&'a dyn RecordStore<StructureRecord>>,
    ) -> Self {
        Self {
            primary,
            secondary,
            structures,
        }
    }

    pub fn aggregate(&self, cluster: &ClusterEntry) -> UmbraResult<RepresentativeResult> {
        let members = self.resolve_members(cluster)?;
        let mut result = select_representative(&members);

        if let Some(structures) = self.structures {
            let fragment_sets: Vec<(String, _)> = structures
                .get_many(&cluster.members)?
                .into_iter()
                .map(|(accession, record)| (accession, record.fragments))
                .collect();
            let (best, worst) = select_structure_extremes(&fragment_sets);
            result.best_structure = best;
            result.worst_structure = worst;
        }

        Ok(result)
    }

    /// Fixed member order: primary-store members first, then secondary,
    /// each in the cluster's own lookup order. An accession resolved from
    /// the primary store is not re-added from the secondary one.
    fn resolve_members(&self, cluster: &ClusterEntry) -> UmbraResult<Vec<ClusterMember>> {
        let mut members = Vec::new();

        for (accession, record) in self.primary.get_many(&cluster.members)? {
            members.push(to_member(accession, record, StoreId::Primary));
        }
        for (accession, record) in self.secondary.get_many(&cluster.members)? {
            if members.iter().any(|m| m.accession == accession) {
                continue;
            }
            members.push(to_member(accession, record, StoreId::Secondary));
        }

        for accession in &cluster.members {
            if !members.iter().any(|m| &m.accession == accession) {
                warn!(
                    cluster = %cluster.accession,
                    accession = %accession,
                    "cluster member not found in either store, skipping"
                );
            }
        }
        Ok(members)
    }
}

fn to_member(accession: String, record: SequenceRecord, store: StoreId) -> ClusterMember {
    ClusterMember {
        accession,
        store,
        coverage: record.coverage,
        is_transmembrane: record.is_transmembrane,
        has_signal_peptide: record.has_signal_peptide,
    }
}
