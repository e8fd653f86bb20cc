use super::StorageService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct PresignRequest {
    pub bucket: String,
    pub key: String,
    pub expires_in: Duration,
}

#[derive(Clone)]
pub struct MockStorage {
    requests: Arc<Mutex<Vec<PresignRequest>>>,
    fail_with: Option<String>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn with_failure(mut self, message: String) -> Self {
        self.fail_with = Some(message);
        self
    }

    pub fn get_presign_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<PresignRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageService for MockStorage {
    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String> {
        self.requests.lock().unwrap().push(PresignRequest {
            bucket: bucket.to_string(),
            key: key.to_string(),
            expires_in,
        });

        if let Some(message) = &self.fail_with {
            return Err(Error::Signing(message.clone()));
        }

        Ok(format!(
            "https://{}.s3.amazonaws.com/{}?X-Amz-Expires={}&X-Amz-Signature=mock",
            bucket,
            key,
            expires_in.as_secs()
        ))
    }
}
