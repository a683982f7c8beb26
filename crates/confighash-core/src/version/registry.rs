use std::collections::HashSet;

use super::behavior::{
    ReleaseStatus, VersionBehavior, V5_SCALE_SET, V5_SYNC, V6_SCALE_SET, V6_SYNC, V7_1_SCALE_SET,
    V7_1_SYNC, V7_SCALE_SET, V7_SYNC, V8_SCALE_SET, V8_SYNC,
};
use crate::digest::DigestAlgorithm;
use crate::errors::{ConfigHashError, Result};

/// Every version this build knows about, oldest first
///
/// v5.1 and v5.2 differ only in components that are not part of any hashed
/// artifact, so they share descriptors and produce identical digests.
pub const BUILTIN_VERSIONS: [VersionBehavior; 6] = [
    VersionBehavior {
        version: "v5.1",
        status: ReleaseStatus::Released,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V5_SCALE_SET,
        sync: V5_SYNC,
    },
    VersionBehavior {
        version: "v5.2",
        status: ReleaseStatus::Released,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V5_SCALE_SET,
        sync: V5_SYNC,
    },
    VersionBehavior {
        version: "v6.0",
        status: ReleaseStatus::Released,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V6_SCALE_SET,
        sync: V6_SYNC,
    },
    VersionBehavior {
        version: "v7.0",
        status: ReleaseStatus::Released,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V7_SCALE_SET,
        sync: V7_SYNC,
    },
    VersionBehavior {
        version: "v7.1",
        status: ReleaseStatus::Released,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V7_1_SCALE_SET,
        sync: V7_1_SYNC,
    },
    VersionBehavior {
        version: "v8.0",
        status: ReleaseStatus::Development,
        digest_algorithm: DigestAlgorithm::Sha256,
        scale_set: V8_SCALE_SET,
        sync: V8_SYNC,
    },
];

/// Version-keyed dispatch table
///
/// Immutable after construction and queried once per hash call.
#[derive(Debug, Clone)]
pub struct VersionRegistry {
    entries: Vec<VersionBehavior>,
}

impl VersionRegistry {
    /// The registry compiled into this build
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_VERSIONS.to_vec(),
        }
    }

    /// Build a registry from arbitrary descriptors
    ///
    /// # Errors
    ///
    /// - `DuplicateSchemaVersion` if a version string appears twice
    /// - `MultipleDevelopmentVersions` if more than one entry is under development
    pub fn from_entries(entries: Vec<VersionBehavior>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.version) {
                return Err(ConfigHashError::DuplicateSchemaVersion {
                    version: entry.version.to_string(),
                });
            }
        }

        let development: Vec<String> = entries
            .iter()
            .filter(|e| e.status == ReleaseStatus::Development)
            .map(|e| e.version.to_string())
            .collect();
        if development.len() > 1 {
            return Err(ConfigHashError::MultipleDevelopmentVersions {
                versions: development,
            });
        }

        Ok(Self { entries })
    }

    /// Look up the behavior of `version`
    ///
    /// There is no fallback: an unregistered version is always an error,
    /// since hashing it with another version's behavior could change the
    /// digests of a released version.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSchemaVersion` if `version` is not registered.
    pub fn resolve(&self, version: &str) -> Result<&VersionBehavior> {
        self.entries
            .iter()
            .find(|e| e.version == version)
            .ok_or_else(|| ConfigHashError::UnknownSchemaVersion {
                version: version.to_string(),
            })
    }

    /// All registered descriptors in registration order
    pub fn entries(&self) -> &[VersionBehavior] {
        &self.entries
    }

    pub fn versions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.version).collect()
    }

    pub fn released_versions(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.status == ReleaseStatus::Released)
            .map(|e| e.version)
            .collect()
    }

    /// The version under development, if any
    pub fn development_version(&self) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.status == ReleaseStatus::Development)
            .map(|e| e.version)
    }
}

impl Default for VersionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
