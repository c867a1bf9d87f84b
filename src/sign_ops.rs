// src/sign_ops.rs
//! File signing and verification
//!
//! RSA PKCS#1 v1.5 over the SHA-256 digest of the whole file. The digest
//! is streamed, so large files are never held in memory.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::key_ops::{load_private_key, load_public_key};
use crate::util::sha256_file;

/// Raw signature bytes, exactly as written to a signature file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Sign a precomputed SHA-256 digest
pub fn sign_digest(private_key: &RsaPrivateKey, digest: &[u8]) -> Result<Signature> {
    let mut rng = rand::thread_rng();
    let signature = private_key.sign_with_rng(&mut rng, Pkcs1v15Sign::new::<Sha256>(), digest)?;
    Ok(Signature(signature))
}

/// Check a signature against a precomputed SHA-256 digest
///
/// A signature whose length does not match the modulus is reported as
/// not verified, the same as a signature that fails the check.
pub fn verify_digest(public_key: &RsaPublicKey, digest: &[u8], signature: &[u8]) -> bool {
    let expected_len = public_key.size();
    if signature.len() != expected_len {
        warn!(
            expected_len,
            actual_len = signature.len(),
            "signature length does not match key size"
        );
        return false;
    }

    match public_key.verify(Pkcs1v15Sign::new::<Sha256>(), digest, signature) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "signature does not verify");
            false
        }
    }
}

/// Sign the full content of `file` and write the raw signature bytes
pub fn rsa_sign_file<P, K, S>(file: P, private_key_path: K, signature_path: S) -> Result<Signature>
where
    P: AsRef<Path>,
    K: AsRef<Path>,
    S: AsRef<Path>,
{
    let (file, signature_path) = (file.as_ref(), signature_path.as_ref());
    let private_key = load_private_key(private_key_path)?;
    let digest = sha256_file(file)?;
    let signature = sign_digest(&private_key, &digest)?;
    fs::write(signature_path, signature.as_bytes())?;

    info!(
        file = %file.display(),
        signature = %signature_path.display(),
        signature_len = signature.len(),
        "signed file"
    );
    Ok(signature)
}

/// Verify that `signature_path` holds a valid signature of `file`'s current
/// content under the public key at `public_key_path`
///
/// `Ok(false)` covers every kind of mismatch; `Err` is reserved for
/// unreadable files and malformed keys.
pub fn rsa_verify_file<P, K, S>(file: P, public_key_path: K, signature_path: S) -> Result<bool>
where
    P: AsRef<Path>,
    K: AsRef<Path>,
    S: AsRef<Path>,
{
    let file = file.as_ref();
    let public_key = load_public_key(public_key_path)?;
    let signature = fs::read(signature_path.as_ref())?;
    let digest = sha256_file(file)?;

    let verified = verify_digest(&public_key, &digest, &signature);
    debug!(file = %file.display(), verified, "verified file signature");
    Ok(verified)
}
