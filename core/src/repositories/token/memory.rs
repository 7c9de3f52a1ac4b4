//! In-memory implementation of the refresh token store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{DomainError, TokenError};

use super::r#trait::RefreshTokenStore;

/// In-memory refresh token store
///
/// Keeps ownership records in a map keyed by token id. Suitable for tests,
/// demos, and single-process deployments; a database-backed implementation
/// plugs in behind the same trait.
#[derive(Clone)]
pub struct InMemoryTokenStore {
    records: Arc<RwLock<HashMap<Uuid, RefreshTokenRecord>>>,
}

impl InMemoryTokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryTokenStore {
    async fn insert(
        &self,
        record: RefreshTokenRecord,
    ) -> Result<RefreshTokenRecord, DomainError> {
        // The write guard makes the check-and-insert atomic
        let mut records = self.records.write().await;

        if records.contains_key(&record.token_id) {
            return Err(DomainError::Token(TokenError::DuplicateTokenId {
                token_id: record.token_id,
            }));
        }

        records.insert(record.token_id, record.clone());
        Ok(record)
    }

    async fn find_owner(&self, token_id: Uuid) -> Result<Option<Uuid>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&token_id).map(|r| r.user_id))
    }
}
