//! Canonical schema constants for structured logging
//!
//! These constants keep field names identical across the engine, the
//! persistence layer and the log capture used in tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_ACTOR: &str = "actor";

// Entity identifiers
pub const FIELD_USER_EMAIL: &str = "user_email";
pub const FIELD_ENTITY_ID: &str = "entity_id";
pub const FIELD_SLOT: &str = "slot";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
