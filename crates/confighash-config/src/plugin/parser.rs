//! Plugin config parser with validation
//!
//! Parses YAML and checks that the development version is listed and that
//! every version names its VM image and all of its container images

use crate::errors::{config_invalid, io_error, yaml_error, Result};
use crate::plugin::format::{PluginConfig, VersionConfig};
use confighash_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::Path;
use std::time::Instant;

const OP_PARSE: &str = "plugin_config_parse";

/// Parse a plugin config file from a path
pub fn parse_plugin_config_file(path: &Path) -> Result<PluginConfig> {
    log_op_start!("plugin_config_load", path = %path.display());
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|e| io_error("plugin_config_read", e))
        .and_then(|content| parse_plugin_config_str(&content));

    match result {
        Ok(config) => {
            log_op_end!(
                "plugin_config_load",
                duration_ms = start.elapsed().as_millis() as u64,
                versions = config.versions.len() as u64,
                plugin_version = config.plugin_version.as_str()
            );
            Ok(config)
        }
        Err(e) => {
            log_op_error!(
                "plugin_config_load",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Parse a plugin config from a string
pub fn parse_plugin_config_str(content: &str) -> Result<PluginConfig> {
    let config: PluginConfig =
        serde_yaml::from_str(content).map_err(|e| yaml_error(OP_PARSE, e))?;

    validate_plugin_config(&config)?;

    Ok(config)
}

fn validate_plugin_config(config: &PluginConfig) -> Result<()> {
    if config.plugin_version.is_empty() {
        return Err(config_invalid(OP_PARSE, "pluginVersion is empty"));
    }

    if !config.versions.contains_key(&config.plugin_version) {
        return Err(config_invalid(
            OP_PARSE,
            &format!(
                "pluginVersion {} is not listed under versions",
                config.plugin_version
            ),
        ));
    }

    for (version, entry) in &config.versions {
        validate_version(version, entry)?;
    }

    Ok(())
}

fn validate_version(version: &str, entry: &VersionConfig) -> Result<()> {
    let vm_image = [
        ("imagePublisher", &entry.image_publisher),
        ("imageOffer", &entry.image_offer),
        ("imageSku", &entry.image_sku),
        ("imageVersion", &entry.image_version),
    ];
    for (field, value) in vm_image {
        if value.is_empty() {
            return Err(config_invalid(
                OP_PARSE,
                &format!("Version {} has an empty {}", version, field),
            ));
        }
    }

    for (name, reference) in entry.images.entries() {
        if reference.is_empty() {
            return Err(config_invalid(
                OP_PARSE,
                &format!("Version {} has no image for {}", version, name),
            ));
        }
    }

    Ok(())
}
