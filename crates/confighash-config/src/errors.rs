//! Error handling for confighash-config
//!
//! Wraps confighash-core ExError with config-specific helpers

use confighash_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a config validation error
pub fn config_invalid(op: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::ConfigInvalid)
        .with_op(op.to_string())
        .with_message(reason.to_string())
}

/// Create a YAML parse error
pub fn yaml_error(op: &str, err: serde_yaml::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(op.to_string())
        .with_message(format!("YAML parse error: {}", err))
}

/// Create an unknown plugin version error
pub fn unknown_plugin_version(version: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("apply_version")
        .with_schema_version(version)
        .with_message(format!("Version {} is not in the plugin config", version))
}

/// Create a version coverage error
pub fn coverage_missing(version: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::CoverageMissing)
        .with_op("check_registry_coverage")
        .with_schema_version(version)
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_carry_codes() {
        assert_eq!(config_invalid("op", "bad").code(), "ERR_CONFIG_INVALID");
        assert_eq!(unknown_plugin_version("v0.1").code(), "ERR_INVALID_INPUT");
        assert_eq!(coverage_missing("v0.1", "missing").code(), "ERR_COVERAGE_MISSING");

        let io = io_error("read", std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.code(), "ERR_IO");
        assert_eq!(io.op(), Some("read"));
    }

    #[test]
    fn test_version_errors_carry_schema_version() {
        assert_eq!(unknown_plugin_version("v9.9").schema_version(), Some("v9.9"));
        assert_eq!(coverage_missing("v7.1", "x").schema_version(), Some("v7.1"));
    }
}
