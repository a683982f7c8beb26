use confighash_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::Role;

/// Result type alias using ConfigHashError
pub type Result<T> = std::result::Result<T, ConfigHashError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the reconciler can match on
/// and that is logged as `err.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Hash targets
    InvalidTarget,
    UnknownSchemaVersion,

    // Rendering / canonical form
    RenderFailed,
    NonCanonicalArtifact,

    // Version registry
    DuplicateSchemaVersion,
    MultipleDevelopmentVersions,

    // Configuration files (plugin config, cluster descriptions)
    InvalidInput,
    ConfigInvalid,
    CoverageMissing,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTarget => "ERR_INVALID_TARGET",
            ExErrorKind::UnknownSchemaVersion => "ERR_UNKNOWN_SCHEMA_VERSION",
            ExErrorKind::RenderFailed => "ERR_RENDER_FAILED",
            ExErrorKind::NonCanonicalArtifact => "ERR_NON_CANONICAL_ARTIFACT",
            ExErrorKind::DuplicateSchemaVersion => "ERR_DUPLICATE_SCHEMA_VERSION",
            ExErrorKind::MultipleDevelopmentVersions => "ERR_MULTIPLE_DEVELOPMENT_VERSIONS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConfigInvalid => "ERR_CONFIG_INVALID",
            ExErrorKind::CoverageMissing => "ERR_COVERAGE_MISSING",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the hash-call context (operation,
/// target, schema version) needed to diagnose a failure from a single log
/// line.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    target: Option<String>,
    schema_version: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            target: None,
            schema_version: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the hash target (scale-set name or `sync`)
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_schema_version(mut self, version: impl Into<String>) -> Self {
        self.schema_version = Some(version.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn schema_version(&self) -> Option<&str> {
        self.schema_version.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(target) = &self.target {
            write!(f, " (target: {})", target)?;
        }
        if let Some(version) = &self.schema_version {
            write!(f, " (schema_version: {})", version)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        if let Some(trace_id) = &self.trace_id {
            write!(f, " (trace_id: {})", trace_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy of the hashing engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigHashError {
    /// The agent pool is not one of the cluster's profiles, or shares its
    /// scale set with another pool
    #[error("Agent pool {pool_name:?} with role {role} is not a valid target of the cluster")]
    InvalidTarget { role: Role, pool_name: String },

    /// The cluster references a version absent from the registry
    #[error("Unknown schema version: {version:?}")]
    UnknownSchemaVersion { version: String },

    /// The artifact renderer could not produce the target
    #[error("Failed to render {target} for schema version {version}: {reason}")]
    Render {
        target: String,
        version: String,
        reason: String,
    },

    /// Renderer output cannot be brought into canonical form
    #[error("Rendered artifact is not canonicalizable: {reason}")]
    NonCanonicalArtifact { reason: String },

    /// A registry was built with the same version twice
    #[error("Schema version registered twice: {version}")]
    DuplicateSchemaVersion { version: String },

    /// A registry was built with more than one version under development
    #[error("More than one development version registered: {versions:?}")]
    MultipleDevelopmentVersions { versions: Vec<String> },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ConfigHashError> for ExError {
    fn from(err: ConfigHashError) -> Self {
        match err {
            ConfigHashError::InvalidTarget { role, pool_name } => {
                ExError::new(ExErrorKind::InvalidTarget)
                    .with_target(pool_name.clone())
                    .with_message(format!(
                        "Agent pool {:?} with role {} is not a valid target of the cluster",
                        pool_name, role
                    ))
            }

            ConfigHashError::UnknownSchemaVersion { version } => {
                ExError::new(ExErrorKind::UnknownSchemaVersion)
                    .with_schema_version(version)
                    .with_message("Schema version is not registered")
            }

            ConfigHashError::Render {
                target,
                version,
                reason,
            } => ExError::new(ExErrorKind::RenderFailed)
                .with_op("render")
                .with_target(target)
                .with_schema_version(version)
                .with_message(reason),

            ConfigHashError::NonCanonicalArtifact { reason } => {
                ExError::new(ExErrorKind::NonCanonicalArtifact)
                    .with_op("canonicalize")
                    .with_message(reason)
            }

            ConfigHashError::DuplicateSchemaVersion { version } => {
                ExError::new(ExErrorKind::DuplicateSchemaVersion)
                    .with_schema_version(version)
                    .with_message("Schema version registered twice")
            }

            ConfigHashError::MultipleDevelopmentVersions { versions } => {
                ExError::new(ExErrorKind::MultipleDevelopmentVersions).with_message(format!(
                    "More than one development version: {}",
                    versions.join(", ")
                ))
            }

            ConfigHashError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ConfigHashError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for ConfigHashError {
    fn from(err: serde_json::Error) -> Self {
        ConfigHashError::Serialization {
            message: err.to_string(),
        }
    }
}
