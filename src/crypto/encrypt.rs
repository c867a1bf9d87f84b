// src/crypto/encrypt.rs
use std::io::{Cursor, Read, Write};

use aescrypt_rs::encrypt;

use crate::aliases::{CypherText, FilePassword, PlainText};
use crate::error::{CoreError, Result};

/// Encrypt everything from `reader` into an AES-Crypt v3 stream on `writer`
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    password: &FilePassword,
    kdf_iterations: u32,
) -> Result<()> {
    encrypt(&mut reader, &mut writer, password, kdf_iterations).map_err(CoreError::Crypto)?;
    writer.flush()?;
    Ok(())
}

/// Encrypt plaintext → AES-Crypt v3 ciphertext (in-memory)
pub fn encrypt_to_vec(
    plaintext: &PlainText,
    password: &FilePassword,
    kdf_iterations: u32,
) -> Result<CypherText> {
    let mut out = Vec::new();
    encrypt_stream(
        Cursor::new(plaintext.expose_secret()),
        &mut out,
        password,
        kdf_iterations,
    )?;
    Ok(CypherText::new(out))
}
