//! Hasher facade.
//!
//! Entry point used by the reconcile loop. Each call resolves the cluster's
//! schema version, renders the target artifact, canonicalizes it and
//! digests the canonical bytes:
//!
//! ```text
//! cluster + target → VersionRegistry → ArtifactRenderer → canonicalize → digest
//! ```
//!
//! ## Logging
//!
//! - `log_op_start!` at entry
//! - `log_op_end!` with the digest on success
//! - `log_op_error!` with the error code on failure
//!
//! Hashing itself has no side effects and never mutates the cluster.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use crate::canonical::canonicalize;
use crate::digest::Digest;
use crate::errors::{ConfigHashError, Result};
use crate::model::{AgentPoolProfile, ClusterConfig};
use crate::render::{ArmRenderer, ArtifactRenderer, SYNC_TARGET};
use crate::version::VersionRegistry;
use crate::{log_op_end, log_op_error, log_op_start};

/// Digests of the deployable artifacts of a cluster
pub trait Hasher: Send + Sync {
    /// Digest of the scale set backing `pool`
    ///
    /// # Errors
    ///
    /// - `InvalidTarget` if `pool` is not one of the cluster's profiles
    /// - `UnknownSchemaVersion` if the cluster's version is not registered
    /// - `Render` / `NonCanonicalArtifact` if the artifact cannot be produced
    fn hash_scale_set(&self, cluster: &ClusterConfig, pool: &AgentPoolProfile) -> Result<Digest>;

    /// Digest of the manifest bundle applied by the sync pod
    ///
    /// # Errors
    ///
    /// - `UnknownSchemaVersion` if the cluster's version is not registered
    /// - `Render` / `NonCanonicalArtifact` if the artifact cannot be produced
    fn hash_sync_pod(&self, cluster: &ClusterConfig) -> Result<Digest>;
}

/// Every digest of one cluster, as recorded after a deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterDigests {
    /// Scale-set digests keyed by scale-set name
    pub scale_sets: BTreeMap<String, Digest>,
    pub sync_pod: Digest,
}

/// [`Hasher`] backed by a version registry and an artifact renderer
///
/// Holds no mutable state; one instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use confighash_core::{ClusterHasher, Hasher};
/// use confighash_core::model::{AgentPoolProfile, ClusterConfig, Role};
///
/// let pool = AgentPoolProfile::new(Role::Master);
/// let cluster = ClusterConfig {
///     schema_version: "v7.1".to_string(),
///     agent_pool_profiles: vec![pool.clone()],
///     ..ClusterConfig::default()
/// };
///
/// let digest = ClusterHasher::new().hash_scale_set(&cluster, &pool).unwrap();
/// assert_eq!(digest.to_hex().len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterHasher<R = ArmRenderer> {
    registry: VersionRegistry,
    renderer: R,
}

impl ClusterHasher<ArmRenderer> {
    /// Built-in registry with the reference renderer
    pub fn new() -> Self {
        Self::with_renderer(VersionRegistry::builtin(), ArmRenderer::new())
    }
}

impl Default for ClusterHasher<ArmRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ArtifactRenderer> ClusterHasher<R> {
    pub fn with_renderer(registry: VersionRegistry, renderer: R) -> Self {
        Self { registry, renderer }
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// Digest every scale set and the sync pod of `cluster`
    ///
    /// # Errors
    ///
    /// - `InvalidTarget` if two pools map to the same scale-set name
    /// - any error of [`Hasher::hash_scale_set`] or [`Hasher::hash_sync_pod`]
    pub fn hash_cluster(&self, cluster: &ClusterConfig) -> Result<ClusterDigests> {
        log_op_start!(
            "hash_cluster",
            schema_version = cluster.schema_version.as_str(),
            pools = cluster.agent_pool_profiles.len() as u64
        );
        let start = Instant::now();

        let result = self.hash_cluster_impl(cluster).map_err(|e| {
            log_op_error!(
                "hash_cluster",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                schema_version = cluster.schema_version.as_str()
            );
            e
        })?;

        log_op_end!(
            "hash_cluster",
            duration_ms = start.elapsed().as_millis() as u64,
            schema_version = cluster.schema_version.as_str(),
            scale_sets = result.scale_sets.len() as u64
        );

        Ok(result)
    }

    fn hash_cluster_impl(&self, cluster: &ClusterConfig) -> Result<ClusterDigests> {
        let mut seen = HashSet::new();
        for pool in &cluster.agent_pool_profiles {
            if !seen.insert(pool.scale_set_name()) {
                return Err(ConfigHashError::InvalidTarget {
                    role: pool.role,
                    pool_name: pool.name.clone(),
                });
            }
        }

        let mut scale_sets = BTreeMap::new();
        for pool in &cluster.agent_pool_profiles {
            scale_sets.insert(pool.scale_set_name(), self.hash_scale_set(cluster, pool)?);
        }

        Ok(ClusterDigests {
            scale_sets,
            sync_pod: self.hash_sync_pod(cluster)?,
        })
    }

    fn scale_set_digest(&self, cluster: &ClusterConfig, pool: &AgentPoolProfile) -> Result<Digest> {
        if !cluster.contains_pool(pool) {
            return Err(ConfigHashError::InvalidTarget {
                role: pool.role,
                pool_name: pool.name.clone(),
            });
        }

        let behavior = self.registry.resolve(&cluster.schema_version)?;
        let rendered = self.renderer.render_scale_set(cluster, pool, behavior)?;
        let canonical = canonicalize(&rendered)?;
        Ok(behavior.digest_algorithm.digest(&canonical))
    }

    fn sync_pod_digest(&self, cluster: &ClusterConfig) -> Result<Digest> {
        let behavior = self.registry.resolve(&cluster.schema_version)?;
        let rendered = self.renderer.render_sync_manifests(cluster, behavior)?;
        let canonical = canonicalize(&rendered)?;
        Ok(behavior.digest_algorithm.digest(&canonical))
    }
}

impl<R: ArtifactRenderer> Hasher for ClusterHasher<R> {
    fn hash_scale_set(&self, cluster: &ClusterConfig, pool: &AgentPoolProfile) -> Result<Digest> {
        let target = pool.scale_set_name();
        log_op_start!(
            "hash_scale_set",
            schema_version = cluster.schema_version.as_str(),
            target = target.as_str(),
            role = pool.role.as_str(),
            pool_name = pool.name.as_str()
        );
        let start = Instant::now();

        let digest = self.scale_set_digest(cluster, pool).map_err(|e| {
            log_op_error!(
                "hash_scale_set",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                schema_version = cluster.schema_version.as_str(),
                target = target.as_str()
            );
            e
        })?;

        log_op_end!(
            "hash_scale_set",
            duration_ms = start.elapsed().as_millis() as u64,
            schema_version = cluster.schema_version.as_str(),
            target = target.as_str(),
            digest = %digest
        );

        Ok(digest)
    }

    fn hash_sync_pod(&self, cluster: &ClusterConfig) -> Result<Digest> {
        log_op_start!(
            "hash_sync_pod",
            schema_version = cluster.schema_version.as_str(),
            target = SYNC_TARGET
        );
        let start = Instant::now();

        let digest = self.sync_pod_digest(cluster).map_err(|e| {
            log_op_error!(
                "hash_sync_pod",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                schema_version = cluster.schema_version.as_str(),
                target = SYNC_TARGET
            );
            e
        })?;

        log_op_end!(
            "hash_sync_pod",
            duration_ms = start.elapsed().as_millis() as u64,
            schema_version = cluster.schema_version.as_str(),
            target = SYNC_TARGET,
            digest = %digest
        );

        Ok(digest)
    }
}
