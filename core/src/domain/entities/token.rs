//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for JWT payloads
///
/// The same structure backs both token kinds: access tokens carry the
/// principal's roles, refresh tokens carry an empty role list. The
/// constructors below are the claim builders for each kind; apart from the
/// freshly generated `jti` they are pure functions of their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for this token instance)
    pub jti: String,

    /// Role names carried by an access token (empty for refresh tokens)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Claims {
    /// Builds the claim set for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The principal's id
    /// * `roles` - Role names assigned to the principal
    /// * `issuer` - Configured issuer string
    /// * `ttl` - Access token lifetime
    /// * `now` - Issuance instant (explicit so issuance is deterministic under test)
    pub fn new_access_token(
        subject: Uuid,
        roles: Vec<String>,
        issuer: &str,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            roles,
        }
    }

    /// Builds the minimal claim set for a refresh token
    pub fn new_refresh_token(subject: Uuid, issuer: &str, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
            roles: Vec::new(),
        }
    }

    /// Gets the principal id from the subject claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Gets the unique token id from the `jti` claim
    pub fn token_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.jti)
    }

    /// Checks whether the lifetime window has elapsed at the given instant
    ///
    /// The boundary is exact: a token is expired iff `now >= exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks whether this claim set carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Refresh token ownership record persisted in the store
///
/// One record per issued refresh token; records are inserted once and never
/// updated. The `token_id` is the refresh token's `jti` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Unique id of the refresh token this record belongs to
    pub token_id: Uuid,

    /// Principal that owns the refresh token
    pub user_id: Uuid,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new ownership record
    pub fn new(token_id: Uuid, user_id: Uuid) -> Self {
        Self {
            token_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
