//! Plugin config
//!
//! Provides:
//! - The plugin config file format
//! - YAML parser with validation
//! - Applying one version's images to a cluster
//! - Coverage checks against the version registry

pub mod apply;
pub mod coverage;
pub mod format;
pub mod parser;

pub use apply::apply_version;
pub use coverage::{check_registry_coverage, released_versions};
pub use format::{PluginConfig, VersionConfig};
pub use parser::{parse_plugin_config_file, parse_plugin_config_str};
