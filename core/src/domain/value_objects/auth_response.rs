//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;

/// Authentication response containing tokens and role metadata
///
/// Returned after a successful sign-up or login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Role names assigned to the principal
    pub roles: Vec<String>,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and role names
    pub fn from_token_pair(token_pair: TokenPair, roles: Vec<String>) -> Self {
        Self {
            access_token: token_pair.access_token,
            refresh_token: token_pair.refresh_token,
            expires_in: token_pair.access_expires_in,
            roles,
        }
    }
}

/// Response to a successful refresh request
///
/// Only the access token is renewed; the caller keeps using the refresh
/// token it already holds until that token expires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Newly issued JWT access token
    pub access_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl RefreshResponse {
    /// Creates a new refresh response
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_pair() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string(), 900, 604800);
        let response = AuthResponse::from_token_pair(pair, vec!["Patient".to_string()]);

        assert_eq!(response.access_token, "access");
        assert_eq!(response.refresh_token, "refresh");
        assert_eq!(response.expires_in, 900);
        assert_eq!(response.roles, vec!["Patient".to_string()]);
    }

    #[test]
    fn test_refresh_response_serialization() {
        let response = RefreshResponse::new("new-access".to_string(), 900);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains(r#""access_token":"new-access""#));
        assert!(json.contains(r#""expires_in":900"#));
    }
}
