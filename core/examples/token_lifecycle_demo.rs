//! Example demonstrating the token lifecycle end to end
//!
//! Wires the in-memory stores to the auth and token services, registers a
//! principal, shows that an active access token cannot be refreshed, then
//! refreshes it once its window has elapsed.
//!
//! Run with: cargo run --example token_lifecycle_demo

use std::sync::Arc;
use std::time::Duration;

use cb_core::repositories::{InMemoryTokenStore, InMemoryUserStore};
use cb_core::services::{AuthService, AuthServiceConfig, TokenService, TokenServiceConfig};
use cb_shared::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.logging.env_filter()))
        .init();

    // One-second access TTL so the refresh path can be shown without waiting
    let token_config = TokenServiceConfig {
        access_token_expiry_secs: 1,
        ..TokenServiceConfig::from_jwt_config(&config.auth.jwt)
    };

    let user_store = Arc::new(InMemoryUserStore::new());
    let token_service = Arc::new(TokenService::new(InMemoryTokenStore::new(), token_config));
    let auth_service = AuthService::new(
        user_store,
        Arc::clone(&token_service),
        AuthServiceConfig::from_auth_config(&config.auth),
    );

    println!("=== Sign up ===");
    let response = auth_service
        .sign_up("alice@example.com", "secret-pw", "Patient")
        .await?;
    println!("roles: {:?}", response.roles);
    println!("access token: {}...", &response.access_token[..40]);

    println!("\n=== Refresh while the access token is still active ===");
    match auth_service
        .refresh(&response.access_token, &response.refresh_token)
        .await
    {
        Ok(_) => println!("unexpected: refresh succeeded"),
        Err(err) => println!("rejected as expected: {}", err),
    }

    println!("\n=== Refresh after the access window has elapsed ===");
    tokio::time::sleep(Duration::from_secs(2)).await;
    let refreshed = auth_service
        .refresh(&response.access_token, &response.refresh_token)
        .await?;
    println!("new access token: {}...", &refreshed.access_token[..40]);

    println!("\n=== Login still works independently ===");
    let login = auth_service.login("alice@example.com", "secret-pw").await?;
    println!("login issued a fresh pair, expires in {}s", login.expires_in);

    Ok(())
}
