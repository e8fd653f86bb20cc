use super::UrlSigner;
use crate::{Error, Result};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha1::Sha1;

/// Signs URLs with the CloudFront canned-policy scheme: an RSA-SHA1
/// signature over a fixed policy statement, attached as query parameters
/// alongside the expiry and the key-pair id.
pub struct CloudFrontSigner;

impl CloudFrontSigner {
    pub fn new() -> Self {
        Self
    }

    fn parse_private_key(pem: &str) -> Result<RsaPrivateKey> {
        // Key pairs are distributed as either PKCS#8 ("BEGIN PRIVATE KEY")
        // or the older PKCS#1 ("BEGIN RSA PRIVATE KEY") PEM.
        RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|e| Error::Signing(format!("Invalid RSA private key: {}", e)))
    }
}

impl Default for CloudFrontSigner {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned policy statement for a single resource. The verifier rebuilds
/// this byte-for-byte from the URL's query parameters, so the field order
/// and the absence of whitespace are part of the contract.
pub fn canned_policy(resource_url: &str, expires_epoch: i64) -> String {
    format!(
        "{{\"Statement\":[{{\"Resource\":\"{}\",\"Condition\":{{\"DateLessThan\":{{\"AWS:EpochTime\":{}}}}}}}]}}",
        resource_url, expires_epoch
    )
}

/// CloudFront's URL-safe base64 variant: `+` -> `-`, `=` -> `_`, `/` -> `~`.
fn encode_signature(signature: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD
        .encode(signature)
        .replace('+', "-")
        .replace('=', "_")
        .replace('/', "~")
}

impl UrlSigner for CloudFrontSigner {
    fn sign_url(
        &self,
        resource_url: &str,
        key_pair_id: &str,
        private_key_pem: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String> {
        let private_key = Self::parse_private_key(private_key_pem)?;
        let signing_key = SigningKey::<Sha1>::new(private_key);

        let expires_epoch = expires_at.timestamp();
        let policy = canned_policy(resource_url, expires_epoch);

        let signature = signing_key
            .try_sign(policy.as_bytes())
            .map_err(|e| Error::Signing(format!("RSA signature failed: {}", e)))?;

        Ok(format!(
            "{}?Expires={}&Signature={}&Key-Pair-Id={}",
            resource_url,
            expires_epoch,
            encode_signature(&signature.to_bytes()),
            key_pair_id
        ))
    }
}
