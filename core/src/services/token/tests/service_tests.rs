//! Unit tests for the token lifecycle service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{Claims, RefreshTokenRecord};
use crate::errors::{DomainError, TokenError};
use crate::repositories::token::memory::InMemoryTokenStore;
use crate::repositories::RefreshTokenStore;
use crate::services::token::{TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret-key-at-least-32-characters-long".to_string(),
        issuer: "carebook".to_string(),
        access_token_expiry_secs: 900,
        refresh_token_expiry_secs: 604800,
    }
}

fn create_test_service() -> TokenService<InMemoryTokenStore> {
    TokenService::new(InMemoryTokenStore::new(), test_config())
}

fn patient() -> Principal {
    Principal::new("patient@example.com", vec!["Patient".to_string()])
}

fn tamper_signature(token: &str) -> String {
    let (head, sig) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = sig.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}

/// An expired access token plus a valid, store-backed refresh token for the
/// same subject — the precondition every successful refresh starts from
async fn expired_pair(
    service: &TokenService<InMemoryTokenStore>,
    principal: &Principal,
) -> (Claims, String, String) {
    let issuer = service.config().issuer.clone();

    let access_claims = Claims::new_access_token(
        principal.id,
        principal.roles.clone(),
        &issuer,
        Duration::seconds(900),
        Utc::now() - Duration::seconds(4500),
    );
    let access_token = service.signer().issue(&access_claims).unwrap();

    let refresh_claims =
        Claims::new_refresh_token(principal.id, &issuer, Duration::days(7), Utc::now());
    let refresh_token = service.signer().issue(&refresh_claims).unwrap();
    service
        .store
        .insert(RefreshTokenRecord::new(
            refresh_claims.token_id().unwrap(),
            principal.id,
        ))
        .await
        .unwrap();

    (access_claims, access_token, refresh_token)
}

#[tokio::test]
async fn test_issue_tokens_populates_claims_and_store() {
    let service = create_test_service();
    let principal = patient();

    let pair = service.issue_tokens(&principal).await.unwrap();

    let access_claims = service.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(access_claims.user_id().unwrap(), principal.id);
    assert_eq!(access_claims.roles, principal.roles);

    let refresh_claims = service.signer().verify(&pair.refresh_token, true).unwrap();
    assert_eq!(refresh_claims.user_id().unwrap(), principal.id);
    assert!(refresh_claims.roles.is_empty());
    assert_ne!(access_claims.jti, refresh_claims.jti);

    // Ownership is recorded under the refresh token's id
    let owner = service
        .store
        .find_owner(refresh_claims.token_id().unwrap())
        .await
        .unwrap();
    assert_eq!(owner, Some(principal.id));

    assert_eq!(pair.access_expires_in, 900);
    assert_eq!(pair.refresh_expires_in, 604800);
}

#[tokio::test]
async fn test_issue_tokens_role_set_is_order_independent() {
    let service = create_test_service();
    let principal = Principal::new(
        "doctor@example.com",
        vec!["Doctor".to_string(), "Admin".to_string()],
    );

    let pair = service.issue_tokens(&principal).await.unwrap();
    let claims = service.verify_access_token(&pair.access_token).unwrap();

    let mut expected = principal.roles.clone();
    let mut actual = claims.roles.clone();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_refresh_rejects_still_active_access_token() {
    let service = create_test_service();
    let pair = service.issue_tokens(&patient()).await.unwrap();

    let result = service
        .refresh_access_token(&pair.access_token, &pair.refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::AccessTokenStillActive)
    ));
}

#[tokio::test]
async fn test_refresh_succeeds_once_access_window_elapsed() {
    let service = create_test_service();
    let principal = patient();
    let (old_claims, access_token, refresh_token) = expired_pair(&service, &principal).await;

    let new_token = service
        .refresh_access_token(&access_token, &refresh_token)
        .await
        .unwrap();

    let new_claims = service.verify_access_token(&new_token).unwrap();
    assert_eq!(new_claims.user_id().unwrap(), principal.id);
    assert_eq!(new_claims.roles, principal.roles);
    // The token id is regenerated, not copied, and the window is fresh
    assert_ne!(new_claims.jti, old_claims.jti);
    assert!(new_claims.exp > old_claims.exp);
}

#[tokio::test]
async fn test_refresh_is_repeatable_without_rotation() {
    let service = create_test_service();
    let principal = patient();
    let (_, access_token, refresh_token) = expired_pair(&service, &principal).await;

    // The same refresh token keeps working; it is not reissued or consumed
    let first = service
        .refresh_access_token(&access_token, &refresh_token)
        .await;
    let second = service
        .refresh_access_token(&access_token, &refresh_token)
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[tokio::test]
async fn test_refresh_rejects_tampered_access_token() {
    let service = create_test_service();
    let principal = patient();
    let (_, access_token, refresh_token) = expired_pair(&service, &principal).await;

    let result = service
        .refresh_access_token(&tamper_signature(&access_token), &refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_access_token_from_foreign_issuer() {
    let service = create_test_service();
    let principal = patient();
    let (_, _, refresh_token) = expired_pair(&service, &principal).await;

    // Correct key, wrong issuer, window elapsed
    let foreign_claims = Claims::new_access_token(
        principal.id,
        principal.roles.clone(),
        "someone-else",
        Duration::seconds(900),
        Utc::now() - Duration::seconds(4500),
    );
    let foreign_access = service.signer().issue(&foreign_claims).unwrap();

    let result = service
        .refresh_access_token(&foreign_access, &refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_garbage_access_token() {
    let service = create_test_service();
    let principal = patient();
    let (_, _, refresh_token) = expired_pair(&service, &principal).await;

    let result = service
        .refresh_access_token("not-a-token", &refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_expired_refresh_token() {
    let service = create_test_service();
    let principal = patient();
    let issuer = service.config().issuer.clone();
    let (_, access_token, _) = expired_pair(&service, &principal).await;

    let stale_claims = Claims::new_refresh_token(
        principal.id,
        &issuer,
        Duration::days(7),
        Utc::now() - Duration::days(8),
    );
    let stale_refresh = service.signer().issue(&stale_claims).unwrap();
    service
        .store
        .insert(RefreshTokenRecord::new(
            stale_claims.token_id().unwrap(),
            principal.id,
        ))
        .await
        .unwrap();

    let result = service
        .refresh_access_token(&access_token, &stale_refresh)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_tampered_refresh_token() {
    let service = create_test_service();
    let principal = patient();
    let (_, access_token, refresh_token) = expired_pair(&service, &principal).await;

    let result = service
        .refresh_access_token(&access_token, &tamper_signature(&refresh_token))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_refresh_token_without_record() {
    let service = create_test_service();
    let principal = patient();
    let issuer = service.config().issuer.clone();
    let (_, access_token, _) = expired_pair(&service, &principal).await;

    // Valid signature and lifetime, but never recorded in the store
    let unrecorded =
        Claims::new_refresh_token(principal.id, &issuer, Duration::days(7), Utc::now());
    let unrecorded_token = service.signer().issue(&unrecorded).unwrap();

    let result = service
        .refresh_access_token(&access_token, &unrecorded_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::RefreshTokenMismatch)
    ));
}

#[tokio::test]
async fn test_refresh_rejects_another_users_refresh_token() {
    let service = create_test_service();
    let alice = patient();
    let bob = Principal::new("bob@example.com", vec!["Doctor".to_string()]);

    let (_, alice_access, _) = expired_pair(&service, &alice).await;
    let bob_pair = service.issue_tokens(&bob).await.unwrap();

    let result = service
        .refresh_access_token(&alice_access, &bob_pair.refresh_token)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::RefreshTokenMismatch)
    ));
}

#[tokio::test]
async fn test_full_lifecycle_with_instantly_expiring_access_token() {
    // Zero access TTL lets the whole issue -> refresh path run end to end
    // without crafting claims by hand
    let config = TokenServiceConfig {
        access_token_expiry_secs: 0,
        ..test_config()
    };
    let service = TokenService::new(InMemoryTokenStore::new(), config);
    let principal = patient();

    let pair = service.issue_tokens(&principal).await.unwrap();
    let new_token = service
        .refresh_access_token(&pair.access_token, &pair.refresh_token)
        .await
        .unwrap();

    let claims = service.signer().verify(&new_token, false).unwrap();
    assert_eq!(claims.user_id().unwrap(), principal.id);
    assert_eq!(claims.roles, principal.roles);
}

#[tokio::test]
async fn test_verify_access_token_rejects_expired() {
    let service = create_test_service();
    let principal = patient();
    let (_, access_token, _) = expired_pair(&service, &principal).await;

    let result = service.verify_access_token(&access_token);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::Expired)
    ));
}

#[tokio::test]
async fn test_duplicate_token_id_insert_is_a_hard_error() {
    let service = create_test_service();
    let principal = patient();
    let token_id = Uuid::new_v4();

    service
        .store
        .insert(RefreshTokenRecord::new(token_id, principal.id))
        .await
        .unwrap();

    let result = service
        .store
        .insert(RefreshTokenRecord::new(token_id, principal.id))
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::DuplicateTokenId { .. })
    ));
}
