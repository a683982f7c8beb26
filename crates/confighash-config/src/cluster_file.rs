//! Cluster description files
//!
//! A cluster description is the camelCase YAML form of `ClusterConfig`.
//! Loading only checks what the hasher cannot: structural validity and a
//! non-empty schema version. Whether the version is registered is decided
//! by the hasher at hash time.

use crate::errors::{config_invalid, io_error, yaml_error, Result};
use confighash_core::model::ClusterConfig;
use confighash_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::Path;
use std::time::Instant;

const OP_PARSE: &str = "cluster_parse";

/// Load a cluster description from a path
pub fn load_cluster_file(path: &Path) -> Result<ClusterConfig> {
    log_op_start!("cluster_load", path = %path.display());
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|e| io_error("cluster_read", e))
        .and_then(|content| parse_cluster_str(&content));

    match result {
        Ok(cluster) => {
            log_op_end!(
                "cluster_load",
                duration_ms = start.elapsed().as_millis() as u64,
                schema_version = cluster.schema_version.as_str(),
                pools = cluster.agent_pool_profiles.len() as u64
            );
            Ok(cluster)
        }
        Err(e) => {
            log_op_error!(
                "cluster_load",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Parse a cluster description from a string
pub fn parse_cluster_str(content: &str) -> Result<ClusterConfig> {
    let cluster: ClusterConfig =
        serde_yaml::from_str(content).map_err(|e| yaml_error(OP_PARSE, e))?;

    if cluster.schema_version.is_empty() {
        return Err(config_invalid(OP_PARSE, "schemaVersion is empty"));
    }

    Ok(cluster)
}
