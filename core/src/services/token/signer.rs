//! JWT signing and verification.

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Signs and verifies JWTs with a symmetric key (HMAC-SHA-256)
///
/// Verification is dual-mode: the `enforce_expiry` flag only selects whether
/// the lifetime window is checked. Signature and issuer are validated in
/// both modes through the same code path, so the refresh flow can accept an
/// expired access token without ever skipping the cryptographic checks.
///
/// Pure computation, no shared mutable state; safe for unbounded concurrent
/// use.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header: Header,
    enforcing: Validation,
    lenient: Validation,
}

impl TokenSigner {
    /// Create a signer for the given secret and expected issuer
    pub fn new(secret: &str, issuer: &str) -> Self {
        let mut enforcing = Validation::new(Algorithm::HS256);
        enforcing.set_issuer(&[issuer]);
        // Zero leeway keeps the expiry boundary exact
        enforcing.leeway = 0;
        enforcing.validate_exp = true;

        let mut lenient = enforcing.clone();
        lenient.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
            enforcing,
            lenient,
        }
    }

    /// Encode and sign the given claims
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|_| TokenError::GenerationFailed)
    }

    /// Verify a token and return its claims
    ///
    /// Structural well-formedness, signature, and issuer are always checked.
    /// When `enforce_expiry` is false the lifetime window is ignored, which
    /// is what lets the refresh flow inspect an expired access token.
    pub fn verify(&self, token: &str, enforce_expiry: bool) -> Result<Claims, TokenError> {
        let validation = if enforce_expiry {
            &self.enforcing
        } else {
            &self.lenient
        };

        decode::<Claims>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}
