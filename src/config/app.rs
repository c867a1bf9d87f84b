// src/config/app.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::defaults::*;
use crate::consts::{
    CONFIG_ENV_VAR, KDF_ITERATIONS_ENV_VAR, MAX_KDF_ITERATIONS, MAX_RSA_KEY_BITS,
    MIN_RSA_KEY_BITS, RSA_BITS_ENV_VAR, SCRATCH_DIR_ENV_VAR,
};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_crypto")]
    pub crypto: CryptoSettings,
    #[serde(default = "default_paths")]
    pub paths: PathSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CryptoSettings {
    /// PBKDF2 rounds applied to the password by AES Crypt v3
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
    /// Modulus size for newly generated RSA key pairs
    #[serde(default = "default_rsa_key_bits")]
    pub rsa_key_bits: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathSettings {
    /// Where in-place operations stage their output. `None` stages next
    /// to the target; any other directory must be on the same filesystem
    /// for the final rename to succeed.
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crypto: default_crypto(),
            paths: default_paths(),
        }
    }
}

impl Config {
    /// Defaults → TOML file → environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(path = %path.display(), "no config file, using built-in defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from a variable lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(KDF_ITERATIONS_ENV_VAR) {
            self.crypto.kdf_iterations = raw.trim().parse().map_err(|_| {
                CoreError::InvalidConfig(format!("{KDF_ITERATIONS_ENV_VAR}={raw} is not a number"))
            })?;
        }
        if let Some(raw) = lookup(RSA_BITS_ENV_VAR) {
            self.crypto.rsa_key_bits = raw.trim().parse().map_err(|_| {
                CoreError::InvalidConfig(format!("{RSA_BITS_ENV_VAR}={raw} is not a number"))
            })?;
        }
        if let Some(raw) = lookup(SCRATCH_DIR_ENV_VAR) {
            self.paths.scratch_dir = (!raw.is_empty()).then(|| PathBuf::from(raw));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let iterations = self.crypto.kdf_iterations;
        if iterations == 0 || iterations > MAX_KDF_ITERATIONS {
            return Err(CoreError::InvalidConfig(format!(
                "kdf_iterations must be in 1..={MAX_KDF_ITERATIONS}, got {iterations}"
            )));
        }
        let bits = self.crypto.rsa_key_bits;
        if !(MIN_RSA_KEY_BITS..=MAX_RSA_KEY_BITS).contains(&bits) || bits % 8 != 0 {
            return Err(CoreError::InvalidConfig(format!(
                "rsa_key_bits must be a multiple of 8 in {MIN_RSA_KEY_BITS}..={MAX_RSA_KEY_BITS}, got {bits}"
            )));
        }
        Ok(())
    }
}

fn config_file_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("file-protector").join("config.toml")))
}
