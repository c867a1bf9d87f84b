// src/util.rs
//! Hashing helpers shared by signing and the CLI

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use blake3::Hasher;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::error::Result;

const READ_CHUNK_BYTES: usize = 64 * 1024;

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}

/// SHA-256 of a string (e.g. a password), as lowercase hex
pub fn sha256_hex(data: &str) -> String {
    hex::encode(Sha256::digest(data.as_bytes()))
}

/// SHA-1 of a file's full content, read in a streaming fashion
///
/// Legacy checksum only; never use it for signatures.
pub fn sha1_file<P: AsRef<Path>>(path: P) -> Result<[u8; 20]> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// SHA-256 of a file's full content, read in a streaming fashion
pub fn sha256_file<P: AsRef<Path>>(path: P) -> Result<[u8; 32]> {
    let mut reader = BufReader::new(File::open(path.as_ref())?);
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// Hex digests of a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigests {
    pub sha1: String,
    pub sha256: String,
    pub blake3: String,
    pub size_bytes: u64,
}

/// SHA-1, SHA-256 and BLAKE3 of a file in one pass
pub fn file_digests<P: AsRef<Path>>(path: P) -> Result<FileDigests> {
    let mut file = File::open(path.as_ref())?;
    let mut sha1 = Sha1::new();
    let mut sha = Sha256::new();
    let mut b3 = Hasher::new();
    let mut buf = vec![0u8; READ_CHUNK_BYTES];
    let mut size_bytes = 0u64;

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        sha1.update(&buf[..n]);
        sha.update(&buf[..n]);
        b3.update(&buf[..n]);
        size_bytes += n as u64;
    }

    Ok(FileDigests {
        sha1: hex::encode(sha1.finalize()),
        sha256: hex::encode(sha.finalize()),
        blake3: b3.finalize().to_hex().to_string(),
        size_bytes,
    })
}
