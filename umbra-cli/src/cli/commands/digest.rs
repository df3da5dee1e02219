use crate::cli::io::read_jsonl;
use crate::cli::progress::RunObserver;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use umbra_annot::SequenceEntry;
use umbra_core::Config;
use umbra_pipeline::SequencePipeline;
use umbra_store::{CheckpointReader, CheckpointWriter, MemoryStore};

#[derive(Args)]
pub struct DigestArgs {
    /// Pre-parsed sequence entries, one JSON document per line (.gz ok)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Checkpoint directory for snapshots and the accession index
    #[arg(short = 'o', long, value_name = "DIR")]
    pub checkpoint_dir: Option<PathBuf>,

    /// Store name used for snapshot and index files
    #[arg(long, default_value = "sequences")]
    pub name: String,

    /// Domain store snapshot to resolve domain annotations from
    #[arg(long, value_name = "FILE")]
    pub domains: Option<PathBuf>,

    /// Skip accessions already committed by earlier runs
    #[arg(long)]
    pub resume: bool,

    /// Digest entries in parallel before writing
    #[arg(long)]
    pub parallel: bool,
}

pub fn run(args: DigestArgs, config: &Config) -> Result<()> {
    let entries: Vec<SequenceEntry> = read_jsonl(&args.input)?;
    info!(count = entries.len(), "loaded sequence entries");

    let domain_store = match &args.domains {
        Some(path) => {
            let (_, store) = CheckpointReader::load_snapshot(path)?;
            info!(records = store.len(), "loaded domain store snapshot");
            Some(store)
        }
        None => None,
    };

    let store = MemoryStore::new();
    let checkpoint_dir = super::resolve_checkpoint_dir(args.checkpoint_dir.as_deref(), config);
    let writer = CheckpointWriter::new(&checkpoint_dir, args.name.as_str())?;
    let completed = if args.resume {
        CheckpointReader::new(&checkpoint_dir, args.name.as_str()).completed()?
    } else {
        Default::default()
    };

    let observer = RunObserver::new("digest").with_checkpoint(&writer, &store);
    let mut pipeline = SequencePipeline::new(&store, config)
        .with_observer(&observer)
        .with_completed(completed);
    if let Some(domains) = domain_store.as_ref() {
        pipeline = pipeline.with_domain_store(domains);
    }

    let summary = if args.parallel {
        pipeline.run_parallel(entries)?
    } else {
        pipeline.run(entries)?
    };
    observer.finish();

    println!(
        "{} entries processed, {} stored, {} skipped",
        summary.processed, summary.stored, summary.skipped
    );
    Ok(())
}
