//! Artifact rendering.
//!
//! A renderer turns desired state into the external artifact that is
//! actually deployed: the VM scale-set resource model of one agent pool, or
//! the manifest bundle applied by the sync pod. Digests are computed over
//! this output and never over the model structs, so refactoring the model
//! cannot change a digest as long as the rendered artifact stays the same.
//!
//! Renderers must be pure: no clocks, no randomness, no generated
//! identifiers, no I/O. The output is JSON and is canonicalized before it is
//! hashed, so key order and whitespace do not matter. `null` members are
//! dropped during canonicalization, which lets a renderer express "not part
//! of this version's schema" as `null`.

mod scale_set;
mod sync_manifests;

use crate::errors::{ConfigHashError, Result};
use crate::model::{AgentPoolProfile, ClusterConfig};
use crate::version::VersionBehavior;

/// Target name used for the sync-pod manifest bundle
pub const SYNC_TARGET: &str = "sync";

/// Produces the external artifacts that are hashed
pub trait ArtifactRenderer: Send + Sync {
    /// Render the scale-set resource model of `pool`
    ///
    /// # Errors
    ///
    /// Returns `Render` if the pool cannot be expressed as a scale set.
    fn render_scale_set(
        &self,
        cluster: &ClusterConfig,
        pool: &AgentPoolProfile,
        behavior: &VersionBehavior,
    ) -> Result<Vec<u8>>;

    /// Render the manifest bundle applied by the sync pod
    ///
    /// # Errors
    ///
    /// Returns `Render` if the cluster lacks state the bundle requires.
    fn render_sync_manifests(
        &self,
        cluster: &ClusterConfig,
        behavior: &VersionBehavior,
    ) -> Result<Vec<u8>>;
}

/// Reference renderer producing ARM scale-set models and Kubernetes
/// manifests
#[derive(Debug, Clone, Copy, Default)]
pub struct ArmRenderer;

impl ArmRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for ArmRenderer {
    fn render_scale_set(
        &self,
        cluster: &ClusterConfig,
        pool: &AgentPoolProfile,
        behavior: &VersionBehavior,
    ) -> Result<Vec<u8>> {
        let model = scale_set::scale_set_model(cluster, pool, behavior)?;
        Ok(serde_json::to_vec(&model)?)
    }

    fn render_sync_manifests(
        &self,
        cluster: &ClusterConfig,
        behavior: &VersionBehavior,
    ) -> Result<Vec<u8>> {
        let bundle = sync_manifests::sync_bundle(cluster, behavior)?;
        Ok(serde_json::to_vec(&bundle)?)
    }
}

pub(crate) fn render_error(
    target: impl Into<String>,
    behavior: &VersionBehavior,
    reason: impl Into<String>,
) -> ConfigHashError {
    ConfigHashError::Render {
        target: target.into(),
        version: behavior.version.to_string(),
        reason: reason.into(),
    }
}
