// src/crypto/mod.rs
//! Authenticated encryption — no paths, no staging
//!
//! Thin layer over aescrypt-rs. Stream variants work on any `Read`/`Write`
//! pair; `_to_vec` variants work on zeroizing in-memory buffers.
mod decrypt;
mod encrypt;

pub use decrypt::{decrypt_stream, decrypt_to_vec};
pub use encrypt::{encrypt_stream, encrypt_to_vec};

use crate::consts::AESCRYPT_V3_HEADER;

/// Check if data is an AES-Crypt file (any version)
pub fn is_aescrypt_file(data: &[u8]) -> bool {
    data.starts_with(b"AES")
}

/// AES-Crypt version byte, if the header is valid
pub fn aescrypt_version(data: &[u8]) -> Option<u8> {
    if is_aescrypt_file(data) {
        data.get(3).copied()
    } else {
        None
    }
}

pub fn is_aescrypt_v3(data: &[u8]) -> bool {
    data.starts_with(AESCRYPT_V3_HEADER)
}
