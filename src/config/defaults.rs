// src/config/defaults.rs
use crate::config::app::{CryptoSettings, PathSettings};
use crate::consts::{DEFAULT_KDF_ITERATIONS, DEFAULT_RSA_KEY_BITS};

pub fn default_kdf_iterations() -> u32 {
    DEFAULT_KDF_ITERATIONS
}

pub fn default_rsa_key_bits() -> usize {
    DEFAULT_RSA_KEY_BITS
}

pub fn default_crypto() -> CryptoSettings {
    CryptoSettings {
        kdf_iterations: default_kdf_iterations(),
        rsa_key_bits: default_rsa_key_bits(),
    }
}

pub fn default_paths() -> PathSettings {
    PathSettings { scratch_dir: None }
}
