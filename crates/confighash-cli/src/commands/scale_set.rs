//! Scale-set digest command
//!
//! Usage: confighash scale-set --cluster <PATH> --role <ROLE> [--name <NAME>]

use clap::Args;
use confighash_core::model::Role;
use confighash_core::{ClusterHasher, Hasher};
use confighash_core_types::RequestContext;
use std::path::PathBuf;

use super::{hash_error, load_cluster, GlobalArgs};

#[derive(Debug, Args)]
pub struct ScaleSetArgs {
    /// Path to the cluster description YAML
    #[arg(long)]
    pub cluster: PathBuf,

    /// Role of the agent pool (master, infra, compute)
    #[arg(long)]
    pub role: Role,

    /// Pool name, to pick one of several compute pools
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute scale-set command
pub fn execute(
    args: ScaleSetArgs,
    global: &GlobalArgs,
    ctx: &RequestContext,
) -> Result<(), Box<dyn std::error::Error>> {
    let cluster = load_cluster(&args.cluster, global, ctx)?;

    let pool = cluster
        .pools_with_role(args.role)
        .find(|p| args.name.as_deref().map_or(true, |name| p.name == name))
        .ok_or_else(|| {
            format!(
                "Cluster has no {} pool{}",
                args.role,
                args.name
                    .as_deref()
                    .map(|n| format!(" named {:?}", n))
                    .unwrap_or_default()
            )
        })?;

    let digest = ClusterHasher::new()
        .hash_scale_set(&cluster, pool)
        .map_err(|e| hash_error(e, ctx))?;

    println!("{}", digest);
    Ok(())
}
