//! Edge network URL signing for download authorizations
//!
//! Signs resource URLs so the CDN can verify them against a pre-registered
//! public key. Signing is a pure computation: no network I/O, no state.

pub mod mock;
pub mod signer;

pub use mock::MockUrlSigner;
pub use signer::CloudFrontSigner;

use crate::Result;
use chrono::{DateTime, Utc};

pub trait UrlSigner: Send + Sync {
    /// Produce a signed URL granting GET access to `resource_url` until
    /// `expires_at`, verifiable by the edge network via `key_pair_id`.
    fn sign_url(
        &self,
        resource_url: &str,
        key_pair_id: &str,
        private_key_pem: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String>;
}
