// src/crypto/decrypt.rs
use std::io::{Cursor, Read, Write};

use aescrypt_rs::decrypt;

use crate::aliases::{CypherText, FilePassword, PlainText};
use crate::error::{CoreError, Result};

/// Decrypt an AES-Crypt stream from `reader` into `writer`
///
/// Fails with [`CoreError::Crypto`] on a wrong password or any integrity
/// check mismatch. Plaintext written before a late failure is the caller's
/// to discard.
pub fn decrypt_stream<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    password: &FilePassword,
) -> Result<()> {
    decrypt(&mut reader, &mut writer, password).map_err(CoreError::Crypto)?;
    writer.flush()?;
    Ok(())
}

/// Decrypt AES-Crypt ciphertext → plaintext (in-memory)
pub fn decrypt_to_vec(ciphertext: &CypherText, password: &FilePassword) -> Result<PlainText> {
    let mut out = Vec::new();
    decrypt_stream(Cursor::new(ciphertext.expose_secret()), &mut out, password)?;
    Ok(PlainText::new(out))
}
