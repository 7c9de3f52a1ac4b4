//! Domain-specific error types for authentication and token operations
//!
//! Every variant here is an internal distinction used for logging and
//! metrics. The conversions at the bottom collapse them into the public
//! [`ErrorResponse`] shape so callers cannot tell rejection kinds apart
//! (distinguishing, say, a bad signature from a foreign issuer would hand an
//! attacker an oracle).

use thiserror::Error;
use uuid::Uuid;

use cb_shared::types::{error_codes, ErrorResponse};

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Token verification and lifecycle errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    SignatureInvalid,

    #[error("Token issuer mismatch")]
    IssuerMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Invalid access token")]
    InvalidAccessToken,

    #[error("Access token is still active")]
    AccessTokenStillActive,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token does not belong to the presented subject")]
    RefreshTokenMismatch,

    #[error("Duplicate token id: {token_id}")]
    DuplicateTokenId { token_id: Uuid },

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Credential validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password length out of bounds (min: {min}, max: {max}, actual: {actual})")]
    InvalidPasswordLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("At least one role is required")]
    MissingRole,
}

/// Convert any domain error into the public response shape
///
/// All authentication and token-policy rejections collapse to one generic
/// `UNAUTHORIZED` payload. Validation failures keep field-level detail (they
/// concern the caller's own input, not another principal's tokens), and
/// store unavailability is surfaced distinctly so clients know a retry can
/// help.
impl From<&super::DomainError> for ErrorResponse {
    fn from(err: &super::DomainError) -> Self {
        use super::DomainError;

        match err {
            DomainError::Auth(_) | DomainError::Token(_) => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication failed")
            }
            DomainError::Validation(e) => {
                ErrorResponse::new(error_codes::VALIDATION_FAILED, "Invalid input")
                    .with_detail("reason", serde_json::json!(e.to_string()))
            }
            DomainError::StoreUnavailable { .. } => ErrorResponse::new(
                error_codes::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable",
            ),
            DomainError::NotFound { resource } => {
                ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal error")
            }
        }
    }
}
