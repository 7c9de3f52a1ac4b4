//! Identity store trait — the boundary to the user/credential collaborator.

use async_trait::async_trait;

use crate::domain::entities::principal::Principal;
use crate::errors::DomainError;

/// Interface to the identity collaborator owning registration and credentials
///
/// The token subsystem treats this as a black box: password hashing, email
/// uniqueness, and credential validation all happen behind it. The core only
/// ever reads the [`Principal`]s it returns.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Verify credentials and return the matching principal
    ///
    /// # Returns
    /// * `Ok(Principal)` - Credentials are valid
    /// * `Err(DomainError::Auth(AuthError::AuthenticationFailed))` - Unknown
    ///   email or wrong password; the two cases are deliberately not
    ///   distinguished
    ///
    /// # Example
    /// ```no_run
    /// # use cb_core::repositories::UserStore;
    /// # async fn example(store: &impl UserStore) -> Result<(), Box<dyn std::error::Error>> {
    /// let principal = store.authenticate("patient@example.com", "secret-pw").await?;
    /// println!("Authenticated {} with roles {:?}", principal.id, principal.roles);
    /// # Ok(())
    /// # }
    /// ```
    async fn authenticate(&self, email: &str, password: &str) -> Result<Principal, DomainError>;

    /// Register a new principal with an initial role
    ///
    /// # Returns
    /// * `Ok(Principal)` - The newly created principal
    /// * `Err(DomainError::Validation(_))` - Email format, password length
    ///   (8 to 16 characters), or missing role
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email taken
    async fn create_principal(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Principal, DomainError>;
}
