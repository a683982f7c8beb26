//! Cluster digests command
//!
//! Usage: confighash all --cluster <PATH> [--json]

use clap::Args;
use confighash_core::ClusterHasher;
use confighash_core_types::RequestContext;
use std::path::PathBuf;

use super::{hash_error, load_cluster, GlobalArgs};

#[derive(Debug, Args)]
pub struct AllArgs {
    /// Path to the cluster description YAML
    #[arg(long)]
    pub cluster: PathBuf,

    /// Print a JSON object instead of one line per target
    #[arg(long)]
    pub json: bool,
}

/// Execute all command
pub fn execute(
    args: AllArgs,
    global: &GlobalArgs,
    ctx: &RequestContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let cluster = load_cluster(&args.cluster, global, ctx)?;

    let digests = ClusterHasher::new()
        .hash_cluster(&cluster)
        .map_err(|e| hash_error(e, ctx))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&digests)?);
        return Ok(());
    }

    for (name, digest) in &digests.scale_sets {
        println!("{} {}", name, digest);
    }
    println!("sync {}", digests.sync_pod);

    Ok(())
}
