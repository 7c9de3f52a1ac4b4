//! Principal entity representing an authenticated user of the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user as seen by the token subsystem
///
/// Principals are created and stored by the identity collaborator; this core
/// only reads them. Role names are opaque strings (e.g. `Patient`, `Doctor`,
/// `Admin`) and every principal carries at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier for the principal
    pub id: Uuid,

    /// Email address (unique, normalized by the identity store)
    pub email: String,

    /// Role names assigned to the principal
    pub roles: Vec<String>,

    /// Timestamp when the principal was created
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new Principal instance with a fresh id
    pub fn new(email: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            roles,
            created_at: Utc::now(),
        }
    }

    /// Checks whether the principal holds the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
