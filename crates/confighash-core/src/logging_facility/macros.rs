//! Operation logging macros
//!
//! An operation logs one `start` event and then exactly one `end` or
//! `end_error` event. All three share the `component`, `op` and `event`
//! keys; extra fields follow as in any `tracing` macro.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $event:ident, $op:expr $(, $($field:tt)*)?) => {
        $crate::__tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::__core_types::schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use confighash_core::log_op_start;
/// log_op_start!("hash_sync_pod");
/// log_op_start!("hash_scale_set", schema_version = "v7.1", role = "master");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, EVENT_START, $op $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` comes first
///
/// ```
/// # use confighash_core::log_op_end;
/// log_op_end!("hash_sync_pod", duration_ms = 1, digest = "ab12");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, EVENT_END, $op, duration_ms = $duration $(, $($field)*)?)
    };
}

/// Log the failure of an operation
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are logged as `err.kind` and `err.code`.
///
/// ```
/// # use confighash_core::{log_op_error, errors::ConfigHashError};
/// let err = ConfigHashError::UnknownSchemaVersion { version: "v0.0".to_string() };
/// log_op_error!("hash_sync_pod", err, duration_ms = 0, schema_version = "v0.0");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            EVENT_END_ERROR,
            $op,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
