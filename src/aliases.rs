// src/aliases.rs
//! Secret-carrying types used throughout file-protector
//!
//! Buffers are secure-gate aliases so plaintext and key material are
//! zeroized on drop. The password type is the one aescrypt-rs consumes.

use secure_gate::dynamic_alias;

/// Password handed to the AES Crypt v3 backend
pub use aescrypt_rs::aliases::Password as FilePassword;

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>);
dynamic_alias!(CypherText, Vec<u8>);
dynamic_alias!(PrivateKeyDer, Vec<u8>); // PKCS#8 DER, never logged
