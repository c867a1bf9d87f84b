// src/protector.rs
//! `FileProtector` — the file protection service
//!
//! Owns a [`Config`] and the [`Span`] its events are recorded under, and
//! forwards to the free functions in `file_ops`, `key_ops` and `sign_ops`.
//! Holds no mutable state, so one instance can be shared across threads;
//! concurrent calls on the *same* path still need external serialization.

use std::path::Path;

use tracing::{info_span, Span};

use crate::aliases::FilePassword;
use crate::config::Config;
use crate::error::Result;
use crate::file_ops;
use crate::key_ops;
use crate::sign_ops::{self, Signature};

#[derive(Debug, Clone)]
pub struct FileProtector {
    config: Config,
    span: Span,
}

impl Default for FileProtector {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl FileProtector {
    pub fn new(config: Config) -> Self {
        Self::with_span(config, info_span!("file_protector"))
    }

    /// Use a caller-provided span as the logging context for every operation
    pub fn with_span(config: Config, span: Span) -> Self {
        Self { config, span }
    }

    /// Build from [`Config::load`] (defaults, config file, environment)
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
        password: &FilePassword,
    ) -> Result<u64> {
        let _entered = self.span.enter();
        file_ops::encrypt_file_with(source, destination, password, &self.config)
    }

    pub fn encrypt_file_in_place<P: AsRef<Path>>(
        &self,
        path: P,
        password: &FilePassword,
    ) -> Result<u64> {
        let _entered = self.span.enter();
        file_ops::encrypt_file_in_place_with(path, password, &self.config)
    }

    pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
        password: &FilePassword,
    ) -> Result<u64> {
        let _entered = self.span.enter();
        file_ops::decrypt_file_with(source, destination, password, &self.config)
    }

    pub fn decrypt_file_in_place<P: AsRef<Path>>(
        &self,
        path: P,
        password: &FilePassword,
    ) -> Result<u64> {
        let _entered = self.span.enter();
        file_ops::decrypt_file_in_place_with(path, password, &self.config)
    }

    /// Key size comes from `crypto.rsa_key_bits` (3072 unless configured)
    pub fn generate_keys<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        private_key_path: P,
        public_key_path: Q,
    ) -> Result<()> {
        let _entered = self.span.enter();
        key_ops::generate_keys_with_bits(
            private_key_path,
            public_key_path,
            self.config.crypto.rsa_key_bits,
        )
    }

    pub fn sign_file<P: AsRef<Path>, K: AsRef<Path>, S: AsRef<Path>>(
        &self,
        file: P,
        private_key_path: K,
        signature_path: S,
    ) -> Result<Signature> {
        let _entered = self.span.enter();
        sign_ops::rsa_sign_file(file, private_key_path, signature_path)
    }

    pub fn verify_file<P: AsRef<Path>, K: AsRef<Path>, S: AsRef<Path>>(
        &self,
        file: P,
        public_key_path: K,
        signature_path: S,
    ) -> Result<bool> {
        let _entered = self.span.enter();
        sign_ops::rsa_verify_file(file, public_key_path, signature_path)
    }
}
