//! Configuration loading for confighash
//!
//! Reads the files the hashing engine itself never touches:
//! - The plugin config listing every supported version and its images
//! - Cluster descriptions (YAML form of `ClusterConfig`)
//!
//! All errors are `ExError`s with stable codes.

pub mod cluster_file;
pub mod errors;
pub mod plugin;

pub use cluster_file::{load_cluster_file, parse_cluster_str};
pub use errors::Result;
pub use plugin::{
    apply_version, check_registry_coverage, parse_plugin_config_file, parse_plugin_config_str,
    PluginConfig, VersionConfig,
};
