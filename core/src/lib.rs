//! # CareBook Core
//!
//! Core business logic and domain layer for the CareBook backend.
//! This crate contains domain entities, the token lifecycle services,
//! repository interfaces, and error types that form the foundation of
//! the authentication subsystem.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Principal, RefreshTokenRecord, TokenPair};
pub use domain::value_objects::{AuthResponse, RefreshResponse};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{InMemoryTokenStore, InMemoryUserStore, RefreshTokenStore, UserStore};
pub use services::{AuthService, AuthServiceConfig, TokenService, TokenServiceConfig, TokenSigner};
