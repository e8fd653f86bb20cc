use super::StorageService;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{config::Region, Client as S3Client};
use std::time::Duration;

pub struct S3Storage {
    client: S3Client,
}

impl S3Storage {
    pub async fn new(region: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: S3Client::new(&config),
        }
    }

    pub fn new_with_client(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageService for S3Storage {
    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| Error::Signing(format!("Invalid presign expiry: {}", e)))?;

        // SigV4 presigning is a local computation; the signature binds the
        // PUT method, bucket/key, and expiry together.
        let presigned = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| Error::Signing(format!("Failed to presign upload: {}", e)))?;

        Ok(presigned.uri().to_string())
    }
}
