//! In-memory implementation of the identity store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use cb_shared::utils::validation::{
    is_valid_email, is_valid_password_length, normalize_email, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};

use crate::domain::entities::principal::Principal;
use crate::errors::{AuthError, DomainError, ValidationError};

use super::r#trait::UserStore;

/// A principal together with its stored credential hash
#[derive(Debug, Clone)]
struct StoredPrincipal {
    principal: Principal,
    password_hash: String,
}

/// In-memory identity store
///
/// Reference implementation of the identity collaborator: bcrypt-hashed
/// passwords, normalized unique emails, and credential validation. Used by
/// tests and demos; a real deployment substitutes its own implementation
/// behind [`UserStore`].
#[derive(Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, StoredPrincipal>>>,
    bcrypt_cost: u32,
}

impl InMemoryUserStore {
    /// Create a new empty store with the default bcrypt cost
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Create a store with an explicit bcrypt cost (tests use a low cost)
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            bcrypt_cost,
        }
    }

    fn validate_credentials(email: &str, password: &str, role: &str) -> Result<(), DomainError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !is_valid_password_length(password) {
            return Err(ValidationError::InvalidPasswordLength {
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
                actual: password.chars().count(),
            }
            .into());
        }
        if role.trim().is_empty() {
            return Err(ValidationError::MissingRole.into());
        }
        Ok(())
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Principal, DomainError> {
        let email = normalize_email(email);
        let users = self.users.read().await;

        // Unknown email and wrong password take the same exit so callers
        // cannot probe which emails are registered
        let stored = users
            .values()
            .find(|s| s.principal.email == email)
            .ok_or(AuthError::AuthenticationFailed)?;

        let matches = bcrypt::verify(password, &stored.password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }
        })?;

        if !matches {
            return Err(AuthError::AuthenticationFailed.into());
        }

        Ok(stored.principal.clone())
    }

    async fn create_principal(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Principal, DomainError> {
        Self::validate_credentials(email, password, role)?;

        let email = normalize_email(email);
        let password_hash =
            bcrypt::hash(password, self.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        let mut users = self.users.write().await;

        if users.values().any(|s| s.principal.email == email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let principal = Principal::new(email, vec![role.to_string()]);
        users.insert(
            principal.id,
            StoredPrincipal {
                principal: principal.clone(),
                password_hash,
            },
        );

        Ok(principal)
    }
}
