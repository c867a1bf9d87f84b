// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Builds on the stream primitives from `crypto`. Output is always staged
//! in a temporary file and renamed over the destination only once the
//! backend has succeeded, so a failure never leaves a half-written
//! destination behind. The in-place variants are the same operation with
//! `source == destination`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::aliases::{CypherText, FilePassword};
use crate::config::Config;
use crate::consts::TEMP_FILE_PREFIX;
use crate::crypto::{decrypt_stream, encrypt_stream};
use crate::error::Result;

/// Encrypt a file on disk using AES-Crypt v3 and default settings
///
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    password: &FilePassword,
) -> Result<u64> {
    encrypt_file_with(source, destination, password, &Config::default())
}

/// Encrypt a file on disk using the given settings
pub fn encrypt_file_with<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    password: &FilePassword,
    config: &Config,
) -> Result<u64> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    let plaintext_size_bytes = fs::metadata(source)?.len();
    let input = BufReader::new(File::open(source)?);

    let ciphertext_size_bytes = write_staged(destination, config, |out| {
        encrypt_stream(input, out, password, config.crypto.kdf_iterations)
    })?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        plaintext_size_bytes,
        ciphertext_size_bytes,
        "encrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// Encrypt a file, replacing it with its ciphertext
pub fn encrypt_file_in_place<P: AsRef<Path>>(path: P, password: &FilePassword) -> Result<u64> {
    encrypt_file_in_place_with(path, password, &Config::default())
}

pub fn encrypt_file_in_place_with<P: AsRef<Path>>(
    path: P,
    password: &FilePassword,
    config: &Config,
) -> Result<u64> {
    let path = path.as_ref();
    debug!(path = %path.display(), "encrypting in place");
    encrypt_file_with(path, path, password, config)
}

/// Decrypt an AES-Crypt file on disk using default settings
///
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    password: &FilePassword,
) -> Result<u64> {
    decrypt_file_with(source, destination, password, &Config::default())
}

pub fn decrypt_file_with<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    password: &FilePassword,
    config: &Config,
) -> Result<u64> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    // aescrypt-rs looks for the trailing HMAC using short reads, which a
    // buffered reader splits at its capacity; hand it the whole container
    let ciphertext = CypherText::new(fs::read(source)?);

    let plaintext_size_bytes = write_staged(destination, config, |out| {
        decrypt_stream(Cursor::new(ciphertext.expose_secret()), out, password)
    })?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        plaintext_size_bytes,
        "decrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// Decrypt a file, replacing the ciphertext with its plaintext
///
/// On failure the encrypted file is left exactly as it was.
pub fn decrypt_file_in_place<P: AsRef<Path>>(path: P, password: &FilePassword) -> Result<u64> {
    decrypt_file_in_place_with(path, password, &Config::default())
}

pub fn decrypt_file_in_place_with<P: AsRef<Path>>(
    path: P,
    password: &FilePassword,
    config: &Config,
) -> Result<u64> {
    let path = path.as_ref();
    debug!(path = %path.display(), "decrypting in place");
    decrypt_file_with(path, path, password, config)
}

/// Run `write` against a fresh temporary file, then atomically rename it
/// over `destination`. The temporary file is removed if anything fails.
/// Returns the number of bytes written.
fn write_staged<F>(destination: &Path, config: &Config, write: F) -> Result<u64>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<()>,
{
    let staging_dir = match config.paths.scratch_dir.as_deref() {
        Some(dir) => dir,
        None => parent_dir(destination),
    };
    let staged = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile_in(staging_dir)?;

    {
        let mut out = BufWriter::new(staged.as_file());
        write(&mut out)?;
        out.flush()?;
    }
    staged.as_file().sync_all()?;
    let written = staged.as_file().metadata()?.len();

    // Overwriting keeps the target's mode; new files stay owner-only
    if let Ok(existing) = fs::metadata(destination) {
        fs::set_permissions(staged.path(), existing.permissions())?;
    }

    staged.persist(destination)?;
    Ok(written)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
