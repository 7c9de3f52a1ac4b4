//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::value_objects::{AuthResponse, RefreshResponse};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{RefreshTokenStore, UserStore};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for the externally consumed operations
///
/// Composes the identity collaborator and the token lifecycle service. The
/// service itself is stateless; it can be shared freely across request
/// handlers.
pub struct AuthService<U, S>
where
    U: UserStore,
    S: RefreshTokenStore,
{
    /// Identity collaborator owning registration and credentials
    user_store: Arc<U>,
    /// Token service for issuing and refreshing tokens
    token_service: Arc<TokenService<S>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S> AuthService<U, S>
where
    U: UserStore,
    S: RefreshTokenStore,
{
    /// Create a new authentication service
    pub fn new(
        user_store: Arc<U>,
        token_service: Arc<TokenService<S>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_store,
            token_service,
            config,
        }
    }

    /// Register a new principal and issue its first token pair
    ///
    /// Registration itself (validation, hashing, uniqueness) is owned by the
    /// identity collaborator; no tokens are issued unless it succeeds.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> DomainResult<AuthResponse> {
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        // Step 1: delegate credential handling to the identity store
        let principal = self.user_store.create_principal(email, password, role).await?;

        // Step 2: issue the initial token pair
        let token_pair = self.token_service.issue_tokens(&principal).await?;

        info!(user_id = %principal.id, "principal registered");

        Ok(AuthResponse::from_token_pair(token_pair, principal.roles))
    }

    /// Authenticate an existing principal and issue a token pair
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let principal = match self.user_store.authenticate(email, password).await {
            Ok(principal) => principal,
            Err(err) => {
                warn!(%err, "login rejected");
                return Err(err);
            }
        };

        let token_pair = self.token_service.issue_tokens(&principal).await?;

        info!(user_id = %principal.id, "principal logged in");

        Ok(AuthResponse::from_token_pair(token_pair, principal.roles))
    }

    /// Exchange an expired access token and a valid refresh token for a new
    /// access token
    ///
    /// All verification and matching lives in the token service; every
    /// failure kind surfaces as a distinct [`crate::errors::TokenError`]
    /// variant for logging, and callers collapse them to a generic rejection
    /// at the API boundary.
    pub async fn refresh(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<RefreshResponse> {
        let new_access_token = self
            .token_service
            .refresh_access_token(access_token, refresh_token)
            .await?;

        Ok(RefreshResponse::new(
            new_access_token,
            self.token_service.config().access_token_expiry_secs,
        ))
    }
}
