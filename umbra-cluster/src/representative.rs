//! Picking a cluster's representative and its structural extremes.

use umbra_core::{ClusterMember, RepresentativeResult, StructureFragment, StructureRef};

/// Select the best-covered member of a cluster and OR its structural flags.
///
/// Members must arrive in the fixed lookup order (primary store before
/// secondary, each in its own lookup order). The comparison is strict, so
/// a member with zero full coverage never beats the initial baseline and
/// ties keep the earliest-seen member. Flags aggregate over every member
/// regardless of which one wins.
pub fn select_representative(members: &[ClusterMember]) -> RepresentativeResult {
    let mut representative: Option<String> = None;
    let mut best_coverage = 0.0;
    let mut is_transmembrane = false;
    let mut has_signal_peptide = false;

    for member in members {
        if member.coverage.full > best_coverage {
            best_coverage = member.coverage.full;
            representative = Some(member.accession.clone());
        }
        is_transmembrane |= member.is_transmembrane;
        has_signal_peptide |= member.has_signal_peptide;
    }

    RepresentativeResult {
        representative,
        full_coverage: best_coverage,
        is_transmembrane,
        has_signal_peptide,
        best_structure: None,
        worst_structure: None,
    }
}

/// Find the members with the highest and lowest length-weighted mean
/// model confidence, in one pass.
///
/// Strict comparisons keep the first-seen member on ties. Members whose
/// fragments sum to zero residues carry no usable signal and are skipped.
/// When best and worst land on the same member, worst is reported absent.
pub fn select_structure_extremes(
    members: &[(String, Vec<StructureFragment>)],
) -> (Option<StructureRef>, Option<StructureRef>) {
    let mut best: Option<(f64, StructureRef)> = None;
    let mut worst: Option<(f64, StructureRef)> = None;

    for (accession, fragments) in members {
        let residues: u64 = fragments.iter().map(|f| u64::from(f.length)).sum();
        if residues == 0 {
            continue;
        }
        let weighted: f64 = fragments
            .iter()
            .map(|f| f.avg_confidence * f64::from(f.length))
            .sum();
        let mean = weighted / residues as f64;

        let reference = StructureRef {
            accession: accession.clone(),
            residues: residues as u32,
        };
        if best.as_ref().is_none_or(|(top, _)| mean > *top) {
            best = Some((mean, reference.clone()));
        }
        if worst.as_ref().is_none_or(|(bottom, _)| mean < *bottom) {
            worst = Some((mean, reference));
        }
    }

    let best = best.map(|(_, reference)| reference);
    let mut worst = worst.map(|(_, reference)| reference);
    if let (Some(b), Some(w)) = (&best, &worst) {
        if b.accession == w.accession {
            worst = None;
        }
    }
    (best, worst)
}
