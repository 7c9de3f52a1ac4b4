//! Token lifecycle service: issuance and refresh.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{Claims, RefreshTokenRecord, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RefreshTokenStore;

use super::config::TokenServiceConfig;
use super::signer::TokenSigner;

/// Service orchestrating the token lifecycle
///
/// Composes the claim builders, the signer, and the refresh token store.
/// Holds no state of its own beyond configuration; every invocation is
/// independent.
///
/// # Example
/// ```no_run
/// # use cb_core::domain::entities::Principal;
/// # use cb_core::repositories::InMemoryTokenStore;
/// # use cb_core::services::{TokenService, TokenServiceConfig};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = TokenService::new(InMemoryTokenStore::new(), TokenServiceConfig::default());
/// let principal = Principal::new("patient@example.com", vec!["Patient".to_string()]);
///
/// let pair = service.issue_tokens(&principal).await?;
///
/// // Once the access token's window has elapsed, the pair can be exchanged
/// // for a fresh access token
/// let renewed = service
///     .refresh_access_token(&pair.access_token, &pair.refresh_token)
///     .await;
/// # let _ = renewed;
/// # Ok(())
/// # }
/// ```
pub struct TokenService<S: RefreshTokenStore> {
    pub(crate) store: S,
    config: TokenServiceConfig,
    signer: TokenSigner,
}

impl<S: RefreshTokenStore> TokenService<S> {
    /// Creates a new token service instance
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let signer = TokenSigner::new(&config.jwt_secret, &config.issuer);
        Self {
            store,
            config,
            signer,
        }
    }

    /// Service configuration (read-only)
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub(crate) fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Issues an access/refresh token pair for an authenticated principal
    ///
    /// The access token carries the principal's roles and a short lifetime;
    /// the refresh token carries only the subject and a long lifetime. The
    /// refresh token's id is recorded in the store before the pair is
    /// returned. A token-id collision in the store is a hard error and is
    /// not retried.
    pub async fn issue_tokens(&self, principal: &Principal) -> DomainResult<TokenPair> {
        let now = Utc::now();

        let access_claims = Claims::new_access_token(
            principal.id,
            principal.roles.clone(),
            &self.config.issuer,
            self.config.access_ttl(),
            now,
        );
        let refresh_claims = Claims::new_refresh_token(
            principal.id,
            &self.config.issuer,
            self.config.refresh_ttl(),
            now,
        );

        let access_token = self.signer.issue(&access_claims)?;
        let refresh_token = self.signer.issue(&refresh_claims)?;

        let token_id = refresh_claims
            .token_id()
            .map_err(|e| DomainError::Internal {
                message: format!("Generated refresh token id is not a UUID: {}", e),
            })?;
        self.store
            .insert(RefreshTokenRecord::new(token_id, principal.id))
            .await?;

        debug!(user_id = %principal.id, "issued access/refresh token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_secs,
            self.config.refresh_token_expiry_secs,
        ))
    }

    /// Verifies an access token for an API call (expiry enforced)
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        Ok(self.signer.verify(token, true)?)
    }

    /// Exchanges an expired access token and a valid refresh token for a new
    /// access token
    ///
    /// The protocol, in order:
    /// 1. The access token must be structurally valid, correctly signed, and
    ///    from the configured issuer — but its lifetime window must have
    ///    elapsed. A still-active access token is rejected: it should simply
    ///    keep being used.
    /// 2. The refresh token must pass full verification including expiry.
    /// 3. A store record must exist for the refresh token's id, owned by the
    ///    access token's subject.
    ///
    /// On success a new access token is issued for the same subject and
    /// roles with a fresh token id. The refresh token is not reissued; the
    /// caller keeps it until it expires.
    pub async fn refresh_access_token(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<String> {
        // Step 1: verify the access token without enforcing expiry
        let access_claims = match self.signer.verify(access_token, false) {
            Ok(claims) => claims,
            Err(err) => {
                warn!(%err, "refresh rejected: access token failed verification");
                return Err(TokenError::InvalidAccessToken.into());
            }
        };

        let now = Utc::now();
        if !access_claims.is_expired_at(now) {
            warn!(sub = %access_claims.sub, "refresh rejected: access token still active");
            return Err(TokenError::AccessTokenStillActive.into());
        }

        // Step 2: the refresh token must be fully valid, expiry included
        let refresh_claims = match self.signer.verify(refresh_token, true) {
            Ok(claims) => claims,
            Err(err) => {
                warn!(%err, "refresh rejected: refresh token failed verification");
                return Err(TokenError::InvalidRefreshToken.into());
            }
        };

        // Step 3: extract the identifying claims
        let subject = access_claims
            .user_id()
            .map_err(|_| TokenError::InvalidAccessToken)?;
        let refresh_id = refresh_claims
            .token_id()
            .map_err(|_| TokenError::InvalidRefreshToken)?;

        // Step 4: the store record must exist and belong to the subject
        match self.store.find_owner(refresh_id).await? {
            Some(owner) if owner == subject => {}
            found => {
                warn!(
                    sub = %subject,
                    record_found = found.is_some(),
                    "refresh rejected: refresh token does not match subject"
                );
                return Err(TokenError::RefreshTokenMismatch.into());
            }
        }

        // Step 5: issue a fresh access token for the same subject and roles
        let new_claims = Claims::new_access_token(
            subject,
            access_claims.roles,
            &self.config.issuer,
            self.config.access_ttl(),
            now,
        );
        let new_access_token = self.signer.issue(&new_claims)?;

        info!(user_id = %subject, "access token refreshed");

        Ok(new_access_token)
    }
}
