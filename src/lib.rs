// src/lib.rs
//! file-protector — password-based file encryption and RSA file signing
//!
//! Features:
//! - AES Crypt v3 authenticated encryption, two-path and in-place
//! - Atomic temp-file-then-rename replacement of outputs
//! - RSA key pairs (3072-bit default) stored as PKCS#8 / SPKI DER
//! - PKCS#1 v1.5 SHA-256 file signatures
//! - Full secure-gate integration for plaintext and key buffers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod protector;
pub mod sign_ops;
pub mod util;

// Re-export everything users need at the crate root
pub use aliases::{CypherText, FilePassword, PlainText, PrivateKeyDer};
pub use config::Config;
pub use error::{CoreError, Result as CoreResult};
pub use file_ops::{decrypt_file, decrypt_file_in_place, encrypt_file, encrypt_file_in_place};
pub use key_ops::{generate_keys, KeyPair};
pub use protector::FileProtector;
pub use sign_ops::{rsa_sign_file, rsa_verify_file, Signature};
