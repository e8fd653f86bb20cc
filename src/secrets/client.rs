use super::SecretsService;
use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::{config::Region, Client as SecretsManagerClient};

pub struct SecretsClient {
    client: SecretsManagerClient,
}

impl SecretsClient {
    pub async fn new(region: String) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: SecretsManagerClient::new(&config),
        }
    }

    pub fn new_with_client(client: SecretsManagerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretsService for SecretsClient {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String> {
        tracing::debug!("Retrieving secret {}", secret_id);

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to retrieve secret {}: {}", secret_id, e);
                Error::SecretRetrieval(format!("Failed to retrieve secret {}: {}", secret_id, e))
            })?;

        // Binary-only secrets cannot hold the expected JSON payload.
        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::SecretFormat(format!("Secret {} has no string payload", secret_id))
            })
    }
}
