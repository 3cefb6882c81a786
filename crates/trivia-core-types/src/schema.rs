//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the engine, the
//! store and the HTTP layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_QUESTION_ID: &str = "question_id";
pub const FIELD_CATEGORY_ID: &str = "category_id";

// Collection sizes
pub const FIELD_PAGE: &str = "page";
pub const FIELD_RESULT_LEN: &str = "result_len";
pub const FIELD_POOL_LEN: &str = "pool_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
