//! ConfigHash Core - deterministic configuration hashing for drift detection
//!
//! This crate decides, for every reconcile pass, whether a deployed
//! artifact still matches the cluster's desired state. It provides:
//! - The cluster model (agent pools, router, auth and image configuration)
//! - The version registry mapping schema versions to rendering behavior
//! - Artifact rendering of scale-set models and the sync-pod manifest bundle
//! - Canonicalization and SHA-256 digests of rendered artifacts
//! - The `Hasher` facade used by the reconcile loop
//!
//! Digests of released schema versions are frozen: for fixed inputs they
//! never change, otherwise every affected scale set would be rotated in
//! production.

pub mod canonical;
pub mod digest;
pub mod errors;
pub mod hasher;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod version;

// Used by the logging macros so callers need neither crate in scope.
#[doc(hidden)]
pub use confighash_core_types as __core_types;
#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use digest::{Digest, DigestAlgorithm};
pub use errors::{ConfigHashError, ExError, ExErrorKind, Result};
pub use hasher::{ClusterDigests, ClusterHasher, Hasher};
pub use model::{AgentPoolProfile, ClusterConfig, Role};
pub use render::{ArmRenderer, ArtifactRenderer};
pub use version::{ReleaseStatus, VersionBehavior, VersionRegistry};
