//! Versions command
//!
//! Usage: confighash versions [--plugin-config <PATH>]

use clap::Args;
use confighash_config::{check_registry_coverage, parse_plugin_config_file};
use confighash_core::VersionRegistry;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Also check that this plugin config is covered by the registry
    #[arg(long = "check")]
    pub check: Option<PathBuf>,
}

/// Execute versions command
pub fn execute(args: VersionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = VersionRegistry::builtin();

    if let Some(path) = &args.check {
        let config = parse_plugin_config_file(path)?;
        check_registry_coverage(&config, &registry)?;
    }

    for behavior in registry.entries() {
        println!(
            "{} {} {}",
            behavior.version,
            behavior.status,
            behavior.digest_algorithm.name()
        );
    }

    Ok(())
}
