//! Shared utilities and common types for the CareBook server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Public error response structures
//! - Validation utilities (email format, password bounds)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig};
pub use types::{error_codes, ErrorResponse};
pub use utils::validation;
