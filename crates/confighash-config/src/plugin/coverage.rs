//! Coverage of the plugin config by the version registry
//!
//! Every version the plugin config can deploy must be hashable, and every
//! version except the one under development must be frozen in the
//! registry. A version that is deployable but unregistered would fail every
//! reconcile; one that is deployable but not frozen could silently change
//! its digests.

use crate::errors::{coverage_missing, Result};
use crate::plugin::format::PluginConfig;
use confighash_core::version::{ReleaseStatus, VersionRegistry};

/// Versions of the plugin config that are released, in sorted order
pub fn released_versions(config: &PluginConfig) -> Vec<&str> {
    config
        .versions
        .keys()
        .filter(|v| **v != config.plugin_version)
        .map(String::as_str)
        .collect()
}

/// Check the plugin config against `registry`
///
/// # Errors
///
/// Returns `CoverageMissing` if a listed version is not registered, if a
/// released version is registered as under development, or if
/// `pluginVersion` is not the registry's development version.
pub fn check_registry_coverage(config: &PluginConfig, registry: &VersionRegistry) -> Result<()> {
    for version in config.versions.keys() {
        let behavior = registry.resolve(version).map_err(|_| {
            coverage_missing(version, &format!("Version {} is not registered", version))
        })?;

        if *version != config.plugin_version && behavior.status != ReleaseStatus::Released {
            return Err(coverage_missing(
                version,
                &format!("Version {} is deployable but not released", version),
            ));
        }
    }

    if registry.development_version() != Some(config.plugin_version.as_str()) {
        return Err(coverage_missing(
            &config.plugin_version,
            &format!(
                "pluginVersion {} is not the development version of the registry",
                config.plugin_version
            ),
        ));
    }

    Ok(())
}
