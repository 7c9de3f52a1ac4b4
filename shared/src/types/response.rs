//! Public API response types
//!
//! The error shape here is what callers of the authentication core see.
//! Internal error variants are deliberately collapsed before reaching it so
//! that a client cannot distinguish, say, a bad signature from a foreign
//! issuer (see the conversions in `cb_core::errors`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable error codes used in public responses
pub mod error_codes {
    /// Any authentication or token-policy rejection
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    /// Input failed validation (sign-up fields)
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    /// Backing store temporarily unreachable; the request may be retried
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
    /// Requested resource does not exist
    pub const NOT_FOUND: &str = "NOT_FOUND";
    /// Unexpected internal failure
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}
