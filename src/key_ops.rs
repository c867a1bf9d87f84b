// src/key_ops.rs
//! RSA key-pair generation and DER persistence
//!
//! Private keys are stored as PKCS#8 `PrivateKeyInfo` DER, public keys as
//! X.509 `SubjectPublicKeyInfo` DER.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::aliases::PrivateKeyDer;
use crate::consts::DEFAULT_RSA_KEY_BITS;
use crate::error::Result;

/// A freshly generated or loaded RSA key pair
pub struct KeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl From<RsaPrivateKey> for KeyPair {
    fn from(private: RsaPrivateKey) -> Self {
        let public = private.to_public_key();
        Self { private, public }
    }
}

impl KeyPair {
    /// Generate a new key pair with the given modulus size
    pub fn generate(bits: usize) -> Result<Self> {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, bits)?;
        Ok(private.into())
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Modulus size in bits
    pub fn bits(&self) -> usize {
        self.public.size() * 8
    }

    pub fn private_key_der(&self) -> Result<PrivateKeyDer> {
        let der = self.private.to_pkcs8_der()?;
        Ok(PrivateKeyDer::new(der.as_bytes().to_vec()))
    }

    pub fn public_key_der(&self) -> Result<Vec<u8>> {
        public_key_der(&self.public)
    }

    /// SHA-256 over the SPKI DER, hex encoded
    pub fn fingerprint(&self) -> Result<String> {
        public_key_fingerprint(&self.public)
    }

    /// Write both halves; the private key file is owner-only on Unix
    pub fn write<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        private_key_path: P,
        public_key_path: Q,
    ) -> Result<()> {
        write_private_key_file(private_key_path.as_ref(), &self.private_key_der()?)?;
        fs::write(public_key_path.as_ref(), self.public_key_der()?)?;
        Ok(())
    }
}

/// Generate a 3072-bit key pair and persist it as two DER files
pub fn generate_keys<P: AsRef<Path>, Q: AsRef<Path>>(
    private_key_path: P,
    public_key_path: Q,
) -> Result<()> {
    generate_keys_with_bits(private_key_path, public_key_path, DEFAULT_RSA_KEY_BITS)
}

pub fn generate_keys_with_bits<P: AsRef<Path>, Q: AsRef<Path>>(
    private_key_path: P,
    public_key_path: Q,
    bits: usize,
) -> Result<()> {
    let (private_key_path, public_key_path) = (private_key_path.as_ref(), public_key_path.as_ref());
    let pair = KeyPair::generate(bits)?;
    pair.write(private_key_path, public_key_path)?;

    info!(
        bits,
        private_key = %private_key_path.display(),
        public_key = %public_key_path.display(),
        fingerprint = %pair.fingerprint()?,
        "generated RSA key pair"
    );
    Ok(())
}

/// Load a PKCS#8 DER private key
pub fn load_private_key<P: AsRef<Path>>(path: P) -> Result<RsaPrivateKey> {
    let der = PrivateKeyDer::new(fs::read(path.as_ref())?);
    Ok(RsaPrivateKey::from_pkcs8_der(der.expose_secret())?)
}

/// Load an SPKI DER public key
pub fn load_public_key<P: AsRef<Path>>(path: P) -> Result<RsaPublicKey> {
    let der = fs::read(path.as_ref())?;
    Ok(RsaPublicKey::from_public_key_der(&der)?)
}

pub fn public_key_der(public_key: &RsaPublicKey) -> Result<Vec<u8>> {
    Ok(public_key.to_public_key_der()?.as_bytes().to_vec())
}

pub fn public_key_fingerprint(public_key: &RsaPublicKey) -> Result<String> {
    let spki = public_key_der(public_key)?;
    Ok(hex::encode(Sha256::digest(&spki)))
}

fn write_private_key_file(path: &Path, der: &PrivateKeyDer) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // mode() only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(der.expose_secret())?;
    file.sync_all()?;
    Ok(())
}
