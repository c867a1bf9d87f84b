// src/consts.rs
//! Shared constants — security parameters and defaults

/// PBKDF2 iterations for password-derived AES Crypt v3 keys
// Same default as the reference AES Crypt tools
pub const DEFAULT_KDF_ITERATIONS: u32 = 300_000;

/// Upper bound accepted by the AES Crypt v3 format
pub const MAX_KDF_ITERATIONS: u32 = 5_000_000;

/// Default RSA modulus size for generated key pairs
pub const DEFAULT_RSA_KEY_BITS: usize = 3072;

pub const MIN_RSA_KEY_BITS: usize = 2048;
pub const MAX_RSA_KEY_BITS: usize = 16384;

/// Header magic for AES-Crypt v3 files
pub const AESCRYPT_V3_HEADER: &[u8; 5] = b"AES\x03\x00";

/// Prefix for staging files created next to a destination
pub const TEMP_FILE_PREFIX: &str = ".fprot-";

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "FILE_PROTECTOR_CONFIG";
pub const KDF_ITERATIONS_ENV_VAR: &str = "FILE_PROTECTOR_KDF_ITERATIONS";
pub const RSA_BITS_ENV_VAR: &str = "FILE_PROTECTOR_RSA_BITS";
pub const SCRATCH_DIR_ENV_VAR: &str = "FILE_PROTECTOR_SCRATCH_DIR";
