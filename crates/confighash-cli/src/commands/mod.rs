pub mod all;
pub mod scale_set;
pub mod sync_pod;
pub mod versions;

use clap::Args;
use confighash_config::{apply_version, load_cluster_file, parse_plugin_config_file};
use confighash_core::errors::{ConfigHashError, ExError};
use confighash_core::model::ClusterConfig;
use confighash_core_types::RequestContext;
use std::path::{Path, PathBuf};

/// Options shared by every hashing command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Plugin config whose images are applied to the cluster before hashing
    #[arg(long, global = true)]
    pub plugin_config: Option<PathBuf>,

    /// Schema version to hash with, overriding the cluster's own
    #[arg(long, global = true)]
    pub schema_version: Option<String>,
}

/// Load a cluster description and apply the global overrides
///
/// With a plugin config, the images of the selected version (or of the
/// cluster's own version) are applied.
pub fn load_cluster(
    path: &Path,
    global: &GlobalArgs,
    ctx: &RequestContext,
) -> Result<ClusterConfig, ExError> {
    let mut cluster = load_cluster_file(path).map_err(|e| with_context(e, ctx))?;

    if let Some(version) = &global.schema_version {
        cluster.schema_version = version.clone();
    }

    if let Some(plugin_config) = &global.plugin_config {
        let config = parse_plugin_config_file(plugin_config).map_err(|e| with_context(e, ctx))?;
        let version = cluster.schema_version.clone();
        apply_version(&mut cluster, &config, &version).map_err(|e| with_context(e, ctx))?;
    }

    Ok(cluster)
}

/// Convert a hashing error, attaching the invocation's correlation ids
pub fn hash_error(err: ConfigHashError, ctx: &RequestContext) -> ExError {
    with_context(err.into(), ctx)
}

fn with_context(err: ExError, ctx: &RequestContext) -> ExError {
    let err = err.with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}
