//! Canonical schema constants for structured logging and events
//!
//! Every hash call logs through these keys so that a reconcile pass can be
//! followed across scale sets and the sync bundle.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Hash targets
pub const FIELD_SCHEMA_VERSION: &str = "schema_version";
pub const FIELD_TARGET: &str = "target";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_POOL_NAME: &str = "pool_name";
pub const FIELD_DIGEST: &str = "digest";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
