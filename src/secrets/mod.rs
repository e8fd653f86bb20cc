//! Secret store integration for download authorizations
//!
//! Retrieves the CloudFront signing key payload from AWS Secrets Manager.
//! The key material is fetched fresh on every call so rotation takes effect
//! immediately, and it never leaves the issuing process.

pub mod client;
pub mod mock;

pub use client::SecretsClient;
pub use mock::MockSecretsClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SecretsService: Send + Sync {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String>;
}
