pub mod clusters;
pub mod coverage;
pub mod digest;
pub mod domains;

use std::path::{Path, PathBuf};
use umbra_core::Config;

/// Checkpoint directory resolution: explicit flag, then configuration,
/// then the conventional default.
pub(crate) fn resolve_checkpoint_dir(arg: Option<&Path>, config: &Config) -> PathBuf {
    arg.map(Path::to_path_buf)
        .or_else(|| config.checkpoint.directory.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("checkpoints"))
}
