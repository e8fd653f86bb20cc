use super::UrlSigner;
use crate::Result;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct SignRequest {
    pub resource_url: String,
    pub key_pair_id: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MockUrlSigner {
    requests: Arc<Mutex<Vec<SignRequest>>>,
}

impl MockUrlSigner {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_sign_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<SignRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockUrlSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlSigner for MockUrlSigner {
    fn sign_url(
        &self,
        resource_url: &str,
        key_pair_id: &str,
        _private_key_pem: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String> {
        self.requests.lock().unwrap().push(SignRequest {
            resource_url: resource_url.to_string(),
            key_pair_id: key_pair_id.to_string(),
            expires_at,
        });

        Ok(format!(
            "{}?Expires={}&Signature=mock&Key-Pair-Id={}",
            resource_url,
            expires_at.timestamp(),
            key_pair_id
        ))
    }
}
