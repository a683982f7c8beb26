//! Applying one plugin-config version to a cluster description

use crate::errors::{unknown_plugin_version, Result};
use crate::plugin::format::PluginConfig;
use confighash_core::model::{ClusterConfig, VmImage};

/// Point `cluster` at `version`: its schema version, VM image and container
/// images are replaced by the ones the plugin config lists for `version`
///
/// # Errors
///
/// Returns `InvalidInput` if `version` is not in the plugin config; the
/// cluster is left untouched.
pub fn apply_version(
    cluster: &mut ClusterConfig,
    config: &PluginConfig,
    version: &str,
) -> Result<()> {
    let entry = config
        .versions
        .get(version)
        .ok_or_else(|| unknown_plugin_version(version))?;

    cluster.schema_version = version.to_string();
    cluster.vm_image = VmImage {
        publisher: entry.image_publisher.clone(),
        offer: entry.image_offer.clone(),
        sku: entry.image_sku.clone(),
        version: entry.image_version.clone(),
    };
    cluster.images = entry.images.clone();

    tracing::debug!(
        component = module_path!(),
        schema_version = version,
        image_version = entry.image_version.as_str(),
        "applied plugin version"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::format::VersionConfig;
    use confighash_core::model::ImageConfig;

    fn plugin_config() -> PluginConfig {
        let mut config = PluginConfig {
            plugin_version: "v8.0".into(),
            versions: Default::default(),
        };
        config.versions.insert(
            "v8.0".into(),
            VersionConfig {
                image_publisher: "redhat".into(),
                image_offer: "osa".into(),
                image_sku: "osa_311".into(),
                image_version: "311.146.20190925".into(),
                images: ImageConfig {
                    sync: "quay.io/openshift-on-azure/sync:v8.0".into(),
                    ..ImageConfig::default()
                },
            },
        );
        config
    }

    #[test]
    fn test_apply_version_replaces_images() {
        let mut cluster = ClusterConfig {
            schema_version: "v7.1".into(),
            image_version: "311.0.0".into(),
            ..ClusterConfig::default()
        };

        apply_version(&mut cluster, &plugin_config(), "v8.0").unwrap();

        assert_eq!(cluster.schema_version, "v8.0");
        assert_eq!(cluster.vm_image.sku, "osa_311");
        assert_eq!(cluster.vm_image.version, "311.146.20190925");
        assert_eq!(cluster.images.sync, "quay.io/openshift-on-azure/sync:v8.0");
        // The cluster software version is not part of the plugin config.
        assert_eq!(cluster.image_version, "311.0.0");
    }

    #[test]
    fn test_unknown_version_leaves_cluster_untouched() {
        let mut cluster = ClusterConfig {
            schema_version: "v7.1".into(),
            ..ClusterConfig::default()
        };
        let before = cluster.clone();

        let err = apply_version(&mut cluster, &plugin_config(), "v9.9").unwrap_err();

        assert_eq!(err.code(), "ERR_INVALID_INPUT");
        assert_eq!(cluster, before);
    }
}
