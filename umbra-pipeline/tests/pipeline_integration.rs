//! End-to-end pipeline tests: domain digestion, sequence digestion and
//! cluster aggregation over in-memory stores.
use pretty_assertions::assert_eq;
use umbra_annot::{Feature, SequenceEntry};
use umbra_cluster::ClusterAggregator;
use umbra_core::{
    Category, ClusterEntry, Config, Interval, RepresentativeResult, SequenceRecord,
    StructureFragment, StructureRecord,
};
use umbra_pipeline::{ClusterPipeline, DomainDigester, DomainRow, SequencePipeline};
use umbra_store::{MemoryStore, RecordStore};

fn iv(start: u32, end: u32) -> Interval {
    Interval::new(start, end).unwrap()
}

fn feature(category: Category, label: Option<&str>, start: u32, end: u32) -> Feature {
    Feature {
        category,
        label: label.map(String::from),
        interval: iv(start, end),
    }
}

fn entry(accession: &str, length: u32, features: Vec<Feature>) -> SequenceEntry {
    SequenceEntry {
        accession: accession.to_string(),
        length,
        features,
    }
}

fn structure(accession: &str, fragments: &[(f64, u32)]) -> StructureRecord {
    StructureRecord {
        accession: accession.to_string(),
        fragments: fragments
            .iter()
            .map(|&(avg_confidence, length)| StructureFragment {
                avg_confidence,
                length,
                category_freq: Default::default(),
            })
            .collect(),
    }
}

#[test]
fn test_domain_store_feeds_sequence_digestion() {
    let config = Config::default();

    // 1. fill the domain store from an accession-sorted match stream
    let domains = MemoryStore::new();
    let digester = DomainDigester::new(&domains, &config.digest);
    digester
        .run(vec![
            DomainRow {
                accession: "P11111".to_string(),
                label: "DUF1234".to_string(),
                interval: iv(10, 30),
            },
            DomainRow {
                accession: "P11111".to_string(),
                label: "Kinase_domain".to_string(),
                interval: iv(15, 20),
            },
        ])
        .unwrap();

    // 2. digest sequences; P11111 has no inline matches and falls back to
    // the domain store
    let sequences = MemoryStore::new();
    let pipeline = SequencePipeline::new(&sequences, &config).with_domain_store(&domains);
    pipeline
        .run(vec![entry(
            "P11111",
            100,
            vec![feature(Category::SignalPeptide, None, 1, 22)],
        )])
        .unwrap();

    let record: SequenceRecord = sequences.get("P11111").unwrap().unwrap();
    // the merged domain kept the informative label over the bounding union
    assert_eq!(record.coverage.domains, 20.0);
    assert_eq!(record.coverage.domains_informative, 20.0);
    assert!(record.has_signal_peptide);
    assert!(!record.is_transmembrane);
    assert_eq!(record.coverage.full, 20.0);
}

#[test]
fn test_sequences_then_clusters_end_to_end() {
    let config = Config::default();

    let primary = MemoryStore::new();
    let pipeline = SequencePipeline::new(&primary, &config);
    pipeline
        .run(vec![
            entry(
                "P11111",
                100,
                vec![
                    feature(Category::Domain, Some("Kinase_domain"), 10, 50),
                    feature(Category::Transmembrane, None, 60, 80),
                ],
            ),
            entry(
                "P22222",
                100,
                vec![feature(Category::Disorder, None, 1, 90)],
            ),
        ])
        .unwrap();

    let secondary = MemoryStore::new();
    let secondary_pipeline = SequencePipeline::new(&secondary, &config);
    secondary_pipeline
        .run(vec![entry(
            "UP000001",
            200,
            vec![feature(Category::Domain, Some("Helicase"), 1, 21)],
        )])
        .unwrap();

    let structures = MemoryStore::new();
    structures
        .put("P11111", &structure("P11111", &[(91.5, 100)]))
        .unwrap();
    structures
        .put("P22222", &structure("P22222", &[(40.0, 60), (70.0, 40)]))
        .unwrap();

    let results = MemoryStore::new();
    let aggregator = ClusterAggregator::new(&primary, &secondary, Some(&structures));
    let clusters = ClusterPipeline::new(aggregator, &results, &config.pipeline);
    clusters
        .run(vec![ClusterEntry {
            accession: "UREF_0001".to_string(),
            members: vec![
                "P11111".to_string(),
                "P22222".to_string(),
                "UP000001".to_string(),
                "GONE".to_string(),
            ],
        }])
        .unwrap();

    let result: RepresentativeResult = results.get("UREF_0001").unwrap().unwrap();
    // P22222 is the least dark member: 89% disorder coverage
    assert_eq!(result.representative.as_deref(), Some("P22222"));
    assert_eq!(result.full_coverage, 89.0);
    // the transmembrane flag of P11111 survives aggregation
    assert!(result.is_transmembrane);
    assert!(!result.has_signal_peptide);
    // structure extremes ignore the member with no structure record
    assert_eq!(result.best_structure.unwrap().accession, "P11111");
    assert_eq!(result.worst_structure.unwrap().accession, "P22222");
}
