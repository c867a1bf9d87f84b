// src/error.rs
//! Public error type for the entire crate

use aescrypt_rs::AescryptError;
use rsa::pkcs8;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrong password, corrupted container or failed integrity check
    #[error("Crypto operation failed: {0}")]
    Crypto(AescryptError),

    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("Private key encoding error: {0}")]
    PrivateKey(#[from] pkcs8::Error),

    #[error("Public key encoding error: {0}")]
    PublicKey(#[from] pkcs8::spki::Error),

    #[error("Could not move staged file into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid TOML config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<AescryptError> for CoreError {
    fn from(err: AescryptError) -> Self {
        CoreError::Crypto(err)
    }
}
