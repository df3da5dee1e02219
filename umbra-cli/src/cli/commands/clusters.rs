use crate::cli::io::read_jsonl;
use crate::cli::progress::RunObserver;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use umbra_cluster::ClusterAggregator;
use umbra_core::{ClusterEntry, Config, StructureRecord};
use umbra_pipeline::ClusterPipeline;
use umbra_store::{CheckpointReader, CheckpointWriter, MemoryStore, RecordStore};

#[derive(Args)]
pub struct ClustersArgs {
    /// Cluster entries, one JSON document per line (.gz ok)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Primary sequence store snapshot
    #[arg(long, value_name = "FILE")]
    pub primary: PathBuf,

    /// Secondary sequence store snapshot
    #[arg(long, value_name = "FILE")]
    pub secondary: Option<PathBuf>,

    /// Predicted-structure store snapshot
    #[arg(long, value_name = "FILE")]
    pub structures: Option<PathBuf>,

    /// Checkpoint directory for snapshots and the accession index
    #[arg(short = 'o', long, value_name = "DIR")]
    pub checkpoint_dir: Option<PathBuf>,

    /// Store name used for snapshot and index files
    #[arg(long, default_value = "clusters")]
    pub name: String,
}

pub fn run(args: ClustersArgs, config: &Config) -> Result<()> {
    let clusters: Vec<ClusterEntry> = read_jsonl(&args.input)?;
    info!(count = clusters.len(), "loaded cluster entries");

    let (_, primary) = CheckpointReader::load_snapshot(&args.primary)?;
    let secondary = match &args.secondary {
        Some(path) => CheckpointReader::load_snapshot(path)?.1,
        None => MemoryStore::new(),
    };
    let structures = match &args.structures {
        Some(path) => Some(CheckpointReader::load_snapshot(path)?.1),
        None => None,
    };
    info!(
        primary = primary.len(),
        secondary = secondary.len(),
        "loaded sequence stores"
    );

    let results = MemoryStore::new();
    let aggregator = ClusterAggregator::new(
        &primary,
        &secondary,
        structures
            .as_ref()
            .map(|store| store as &dyn RecordStore<StructureRecord>),
    );

    let observer = RunObserver::new("clusters");
    let pipeline =
        ClusterPipeline::new(aggregator, &results, &config.pipeline).with_observer(&observer);
    let summary = pipeline.run(clusters)?;
    observer.finish();

    let checkpoint_dir = super::resolve_checkpoint_dir(args.checkpoint_dir.as_deref(), config);
    let writer = CheckpointWriter::new(&checkpoint_dir, args.name.as_str())?;
    writer.snapshot(summary.processed, &results, &results.accessions())?;

    println!(
        "{} clusters processed, {} representatives stored",
        summary.processed, summary.stored
    );
    Ok(())
}
