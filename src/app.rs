//! Wiring of environment configuration and live AWS clients into the two
//! authorization operations.
//!
//! These functions are what the request router calls; each one validates
//! configuration before any client is constructed, so misconfiguration
//! never reaches an external service.

use crate::download::DownloadAuthorizer;
use crate::edge::CloudFrontSigner;
use crate::models::{DownloadConfig, PresignedUrl, UploadConfig};
use crate::secrets::SecretsClient;
use crate::storage::S3Storage;
use crate::upload::UploadAuthorizer;
use crate::Result;

/// Handle a `createUploadPresignedUrl` request.
pub async fn create_upload_presigned_url(filename: &str) -> Result<PresignedUrl> {
    let config = UploadConfig::from_env()?;
    let storage = S3Storage::new(config.region.clone()).await;

    UploadAuthorizer::new(config, Box::new(storage))
        .authorize(filename)
        .await
}

/// Handle a `getDownloadPresignedUrl` request.
pub async fn get_download_presigned_url(key: &str) -> Result<PresignedUrl> {
    let config = DownloadConfig::from_env()?;
    let secrets = SecretsClient::new(config.region.clone()).await;

    DownloadAuthorizer::new(config, Box::new(secrets), Box::new(CloudFrontSigner::new()))
        .authorize(key)
        .await
}
