//! Error handling and custom error types
//!
//! Provides unified error handling across the issuer using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Secret retrieval error: {0}")]
    SecretRetrieval(String),

    #[error("Secret format error: {0}")]
    SecretFormat(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
