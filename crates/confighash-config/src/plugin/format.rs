//! Plugin config file format
//!
//! Defines the YAML structure of `pluginconfig-*.yaml`

use confighash_core::model::ImageConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level plugin config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// The version under development
    pub plugin_version: String,

    /// Every supported version, keyed by version string
    pub versions: BTreeMap<String, VersionConfig>,
}

/// Images and VM image of one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionConfig {
    pub image_publisher: String,
    pub image_offer: String,
    pub image_sku: String,
    pub image_version: String,
    pub images: ImageConfig,
}
