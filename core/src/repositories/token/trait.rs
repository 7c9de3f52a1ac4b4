//! Refresh token store trait defining the interface for ownership records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Store trait for refresh token ownership records
///
/// This is the only component of the token subsystem that touches durable
/// storage. The protocol needs exactly two operations: recording ownership
/// when a refresh token is issued, and looking ownership up when one is
/// presented. Records are never updated in place.
///
/// # Concurrency
///
/// Implementations must be safe under concurrent access from simultaneous
/// requests, and `insert` must be an atomic check-and-insert: two inserts
/// for the same token id must never both succeed.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Record ownership of a newly issued refresh token
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The stored record
    /// * `Err(DomainError::Token(TokenError::DuplicateTokenId))` - A record
    ///   with this token id already exists
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be reached
    async fn insert(&self, record: RefreshTokenRecord)
        -> Result<RefreshTokenRecord, DomainError>;

    /// Look up the principal that owns the given refresh token id
    ///
    /// # Returns
    /// * `Ok(Some(user_id))` - A record exists for this token id
    /// * `Ok(None)` - No record found
    /// * `Err(DomainError::StoreUnavailable)` - The store could not be reached
    ///
    /// # Example
    /// ```no_run
    /// # use uuid::Uuid;
    /// # use cb_core::repositories::RefreshTokenStore;
    /// # async fn example(store: &impl RefreshTokenStore) -> Result<(), Box<dyn std::error::Error>> {
    /// let token_id = Uuid::new_v4();
    ///
    /// match store.find_owner(token_id).await? {
    ///     Some(owner) => println!("Token belongs to {}", owner),
    ///     None => println!("No record for this token"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_owner(&self, token_id: Uuid) -> Result<Option<Uuid>, DomainError>;
}
