//! Upload authorization
//!
//! Mints a collision-free object key for a client-supplied filename and
//! issues a time-limited presigned PUT for it.

use crate::models::{PresignedUrl, UploadConfig};
use crate::storage::StorageService;
use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

pub struct UploadAuthorizer {
    config: UploadConfig,
    storage: Box<dyn StorageService>,
}

impl UploadAuthorizer {
    pub fn new(config: UploadConfig, storage: Box<dyn StorageService>) -> Self {
        Self { config, storage }
    }

    /// Issue a presigned PUT authorization for `filename`.
    ///
    /// The key is prefixed with a fresh UUID, so two uploads of the same
    /// filename never share a key. No path sanitization happens here; the
    /// bucket's access policy is the enforcement point.
    pub async fn authorize(&self, filename: &str) -> Result<PresignedUrl> {
        if filename.is_empty() {
            return Err(Error::InvalidArgument(
                "filename must not be empty".to_string(),
            ));
        }

        let key = format!("{}/{}", Uuid::new_v4(), filename);
        debug!("Generated object key {}", key);

        let presigned_url = self
            .storage
            .presign_put(
                &self.config.bucket,
                &key,
                Duration::from_secs(u64::from(self.config.expires_in)),
            )
            .await?;

        info!(
            "Issued upload authorization for {} ({}s)",
            key, self.config.expires_in
        );

        Ok(PresignedUrl {
            bucket: self.config.bucket.clone(),
            key,
            presigned_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn test_config() -> UploadConfig {
        UploadConfig::from_values(
            Some("us-east-1".to_string()),
            Some("assets".to_string()),
            Some("3600".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_authorize_returns_bucket_key_and_url() {
        let storage = MockStorage::new();
        let authorizer = UploadAuthorizer::new(test_config(), Box::new(storage.clone()));

        let result = authorizer.authorize("photo.png").await.unwrap();

        assert_eq!(result.bucket, "assets");
        assert!(result.key.ends_with("/photo.png"));
        assert!(result.presigned_url.contains(&result.key));

        let requests = storage.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bucket, "assets");
        assert_eq!(requests[0].expires_in, Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn test_authorize_key_carries_uuid_prefix() {
        let authorizer = UploadAuthorizer::new(test_config(), Box::new(MockStorage::new()));

        let result = authorizer.authorize("photo.png").await.unwrap();
        let (prefix, rest) = result.key.split_once('/').unwrap();

        assert_eq!(rest, "photo.png");
        assert!(Uuid::parse_str(prefix).is_ok());
    }

    #[tokio::test]
    async fn test_repeated_filenames_never_collide() {
        let authorizer = UploadAuthorizer::new(test_config(), Box::new(MockStorage::new()));

        let first = authorizer.authorize("photo.png").await.unwrap();
        let second = authorizer.authorize("photo.png").await.unwrap();

        assert_ne!(first.key, second.key);
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected_before_presigning() {
        let storage = MockStorage::new();
        let authorizer = UploadAuthorizer::new(test_config(), Box::new(storage.clone()));

        let result = authorizer.authorize("").await;

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(storage.get_presign_count(), 0);
    }

    #[tokio::test]
    async fn test_signing_failure_is_surfaced() {
        let storage = MockStorage::new().with_failure("presigner down".to_string());
        let authorizer = UploadAuthorizer::new(test_config(), Box::new(storage));

        let result = authorizer.authorize("photo.png").await;

        assert!(matches!(result, Err(Error::Signing(_))));
    }
}
