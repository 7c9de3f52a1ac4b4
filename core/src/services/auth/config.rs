//! Configuration for the authentication service

use cb_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether to allow registration of new principals
    pub allow_registration: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
        }
    }
}

impl AuthServiceConfig {
    /// Build from the process-wide authentication configuration
    pub fn from_auth_config(config: &AuthConfig) -> Self {
        Self {
            allow_registration: config.allow_registration,
        }
    }
}
