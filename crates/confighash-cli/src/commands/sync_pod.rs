//! Sync-pod digest command
//!
//! Usage: confighash sync-pod --cluster <PATH>

use clap::Args;
use confighash_core::{ClusterHasher, Hasher};
use confighash_core_types::RequestContext;
use std::path::PathBuf;

use super::{hash_error, load_cluster, GlobalArgs};

#[derive(Debug, Args)]
pub struct SyncPodArgs {
    /// Path to the cluster description YAML
    #[arg(long)]
    pub cluster: PathBuf,
}

/// Execute sync-pod command
pub fn execute(
    args: SyncPodArgs,
    global: &GlobalArgs,
    ctx: &RequestContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let cluster = load_cluster(&args.cluster, global, ctx)?;

    let digest = ClusterHasher::new()
        .hash_sync_pod(&cluster)
        .map_err(|e| hash_error(e, ctx))?;

    println!("{}", digest);
    Ok(())
}
