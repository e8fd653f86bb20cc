use super::SecretsService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockSecretsClient {
    secrets: Arc<Mutex<HashMap<String, String>>>,
    read_count: Arc<Mutex<usize>>,
}

impl MockSecretsClient {
    pub fn new() -> Self {
        Self {
            secrets: Arc::new(Mutex::new(HashMap::new())),
            read_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_secret(self, secret_id: String, payload: String) -> Self {
        self.secrets.lock().unwrap().insert(secret_id, payload);
        self
    }

    pub fn get_read_count(&self) -> usize {
        *self.read_count.lock().unwrap()
    }
}

impl Default for MockSecretsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretsService for MockSecretsClient {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String> {
        let mut count = self.read_count.lock().unwrap();
        *count += 1;

        let secrets = self.secrets.lock().unwrap();
        match secrets.get(secret_id) {
            Some(payload) => Ok(payload.clone()),
            None => Err(Error::SecretRetrieval(format!(
                "Secret not found: {}",
                secret_id
            ))),
        }
    }
}
