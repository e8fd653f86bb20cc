//! Object store integration for upload authorizations
//!
//! Produces time-limited presigned PUT URLs against the private bucket so
//! clients can upload without holding AWS credentials.

pub mod client;
pub mod mock;

pub use client::S3Storage;
pub use mock::MockStorage;

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait StorageService: Send + Sync {
    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String>;
}
