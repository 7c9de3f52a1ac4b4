//! Type definitions shared across server modules
//!
//! - `response` - public error response shape returned at the API boundary

pub mod response;

// Re-export commonly used types at module level
pub use response::{error_codes, ErrorResponse};
