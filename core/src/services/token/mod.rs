//! Token lifecycle module
//!
//! This module handles all token-related operations:
//! - claim construction for access and refresh tokens
//! - JWT signing and dual-mode verification
//! - the issue/refresh protocol over the refresh token store

mod config;
mod service;
mod signer;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signer::TokenSigner;
