//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Every hash call is one operation: it logs exactly one `start` and then
//! either one `end` (with the digest) or one `end_error` (with the error
//! code). Logs are written to stderr so that digests printed on stdout stay
//! machine-readable.
//!
//! # Usage
//!
//! ```rust
//! use confighash_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
