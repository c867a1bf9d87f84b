// tests/common.rs
//! Shared test utilities — logging setup, fast settings, cached RSA keys

use std::path::{Path, PathBuf};

use file_protector::{Config, FilePassword, KeyPair};
use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Test keys use 2048 bits; generation at 3072 is covered once on its own
pub const TEST_KEY_BITS: usize = 2048;

static SIGNING_KEYS: Lazy<KeyPair> =
    Lazy::new(|| KeyPair::generate(TEST_KEY_BITS).expect("generate signing keys"));
static OTHER_KEYS: Lazy<KeyPair> =
    Lazy::new(|| KeyPair::generate(TEST_KEY_BITS).expect("generate unrelated keys"));

/// Initialize test-friendly logging; respects RUST_LOG, safe to call repeatedly
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Low KDF cost so round-trips stay fast in debug builds
#[allow(dead_code)]
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.crypto.kdf_iterations = 1_000;
    config.crypto.rsa_key_bits = TEST_KEY_BITS;
    config
}

#[allow(dead_code)]
pub fn password(s: &str) -> FilePassword {
    FilePassword::new(s.to_owned())
}

/// Write the shared signing key pair into `dir` as (private, public)
#[allow(dead_code)]
pub fn write_signing_keys(dir: &Path) -> (PathBuf, PathBuf) {
    write_pair(&SIGNING_KEYS, dir, "signing")
}

/// Write a key pair unrelated to the signing keys into `dir`
#[allow(dead_code)]
pub fn write_other_keys(dir: &Path) -> (PathBuf, PathBuf) {
    write_pair(&OTHER_KEYS, dir, "other")
}

#[allow(dead_code)]
fn write_pair(pair: &KeyPair, dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    let private = dir.join(format!("{stem}_private.der"));
    let public = dir.join(format!("{stem}_public.der"));
    pair.write(&private, &public).expect("write key pair");
    (private, public)
}
