//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Where and how log events are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines on stderr
    Development,
    /// One JSON object per event on stderr, for controllers
    Production,
    /// Installs nothing; tests use `init_test_capture()`
    Test,
}

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "confighash_core=info,confighash_config=info,confighash=info";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. `RUST_LOG` overrides the default
/// filter. Stdout is left to the digests.
///
/// # Example
///
/// ```
/// use confighash_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter_from_env());

        match profile {
            Profile::Development => {
                builder.try_init().ok();
            }
            Profile::Production => {
                builder.json().try_init().ok();
            }
            Profile::Test => {}
        }
    });
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
