//! Configuration for the token service

use chrono::Duration;

use cb_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret (symmetric, HMAC-SHA-256)
    pub jwt_secret: String,
    /// Issuer stamped into and required from every token
    pub issuer: String,
    /// Access token expiry in seconds
    pub access_token_expiry_secs: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "carebook".to_string(),
            access_token_expiry_secs: 900,
            refresh_token_expiry_secs: 604800,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the process-wide JWT configuration
    pub fn from_jwt_config(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            access_token_expiry_secs: jwt.access_token_expiry,
            refresh_token_expiry_secs: jwt.refresh_token_expiry,
        }
    }

    /// Access token lifetime as a duration
    pub fn access_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_expiry_secs)
    }

    /// Refresh token lifetime as a duration
    pub fn refresh_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry_secs)
    }
}
