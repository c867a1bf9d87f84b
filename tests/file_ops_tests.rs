// tests/file_ops_tests.rs
use std::fs;

use file_protector::error::CoreError;
use file_protector::file_ops::*;
use tempfile::tempdir;

mod common;
use common::{fast_config, password};

const SAMPLE: &str = "This file will be encrypted and decrypted.\n";

#[test]
fn test_encrypt_to_new_path_and_back() {
    common::setup();
    let config = fast_config();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("sample.txt");
    let enc = dir.path().join("sample.txt.aes");
    let dec = dir.path().join("sample.dec.txt");
    fs::write(&plain, SAMPLE).unwrap();

    let pw = password("hunter2");
    let size = encrypt_file_with(&plain, &enc, &pw, &config).unwrap();
    assert_eq!(size, SAMPLE.len() as u64);
    assert!(enc.exists());
    assert_ne!(fs::read(&enc).unwrap(), SAMPLE.as_bytes());

    let size = decrypt_file_with(&enc, &dec, &pw, &config).unwrap();
    assert_eq!(size, SAMPLE.len() as u64);
    assert_eq!(fs::read_to_string(&dec).unwrap(), SAMPLE);
    // source is untouched by a two-path encrypt
    assert_eq!(fs::read_to_string(&plain).unwrap(), SAMPLE);
}

#[test]
fn test_default_settings_roundtrip() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let enc = dir.path().join("secret.aes");
    let dec = dir.path().join("out.txt");
    fs::write(&plain, b"The quick brown fox jumps over the lazy dog").unwrap();

    let pw = password("default-cost");
    let size1 = encrypt_file(&plain, &enc, &pw).unwrap();
    let size2 = decrypt_file(&enc, &dec, &pw).unwrap();

    assert_eq!(size1, size2);
    assert_eq!(fs::read(&dec).unwrap(), fs::read(&plain).unwrap());
}

#[test]
fn test_binary_content_roundtrips() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("blob.bin");
    let enc = dir.path().join("blob.aes");
    let dec = dir.path().join("blob.out");
    let content: Vec<u8> = (0..300_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&plain, &content).unwrap();

    let pw = password("binary");
    encrypt_file_with(&plain, &enc, &pw, &config).unwrap();
    decrypt_file_with(&enc, &dec, &pw, &config).unwrap();

    assert_eq!(fs::read(&dec).unwrap(), content);
}

#[test]
fn test_wrong_password_fails_and_writes_nothing() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let enc = dir.path().join("plain.aes");
    let dec = dir.path().join("plain.out");
    fs::write(&plain, SAMPLE).unwrap();

    encrypt_file_with(&plain, &enc, &password("right"), &config).unwrap();
    let result = decrypt_file_with(&enc, &dec, &password("wrong"), &config);

    assert!(matches!(result, Err(CoreError::Crypto(_))));
    assert!(!dec.exists());
    // no staging files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn test_in_place_encrypt_then_decrypt_restores_file() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let path = dir.path().join("in_place.txt");
    fs::write(&path, SAMPLE).unwrap();

    let pw = password("hunter2");
    encrypt_file_in_place_with(&path, &pw, &config).unwrap();
    let encrypted = fs::read(&path).unwrap();
    assert!(encrypted.starts_with(b"AES"));
    assert_ne!(encrypted, SAMPLE.as_bytes());

    decrypt_file_in_place_with(&path, &pw, &config).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_failed_in_place_decrypt_leaves_ciphertext_intact() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let path = dir.path().join("locked.txt");
    fs::write(&path, SAMPLE).unwrap();

    encrypt_file_in_place_with(&path, &password("right"), &config).unwrap();
    let before = fs::read(&path).unwrap();

    let result = decrypt_file_in_place_with(&path, &password("wrong"), &config);
    assert!(matches!(result, Err(CoreError::Crypto(_))));
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = tempdir().unwrap();
    let result = encrypt_file_with(
        dir.path().join("nope.txt"),
        dir.path().join("nope.aes"),
        &password("pw"),
        &fast_config(),
    );
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_in_place_on_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = encrypt_file_in_place_with(dir.path().join("ghost.txt"), &password("pw"), &fast_config());
    assert!(matches!(result, Err(CoreError::Io(_))));
}

#[test]
fn test_scratch_dir_is_used_for_staging() {
    let mut config = fast_config();
    let scratch = tempdir().unwrap();
    let dir = tempdir().unwrap();
    config.paths.scratch_dir = Some(scratch.path().to_path_buf());

    let path = dir.path().join("staged.txt");
    fs::write(&path, SAMPLE).unwrap();
    let pw = password("pw");

    encrypt_file_in_place_with(&path, &pw, &config).unwrap();
    assert!(fs::read(&path).unwrap().starts_with(b"AES"));
    assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

    decrypt_file_in_place_with(&path, &pw, &config).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
    assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[test]
fn test_failed_decrypt_leaves_scratch_dir_empty() {
    let mut config = fast_config();
    let scratch = tempdir().unwrap();
    let dir = tempdir().unwrap();
    config.paths.scratch_dir = Some(scratch.path().to_path_buf());

    let path = dir.path().join("staged.txt");
    fs::write(&path, SAMPLE).unwrap();
    encrypt_file_in_place_with(&path, &password("right"), &config).unwrap();
    let before = fs::read(&path).unwrap();

    let result = decrypt_file_in_place_with(&path, &password("wrong"), &config);
    assert!(matches!(result, Err(CoreError::Crypto(_))));
    assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_empty_password_is_rejected_by_backend() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let enc = dir.path().join("plain.aes");
    fs::write(&plain, SAMPLE).unwrap();

    let result = encrypt_file_with(&plain, &enc, &password(""), &config);
    assert!(matches!(result, Err(CoreError::Crypto(_))));
    assert!(!enc.exists());
    assert_eq!(fs::read_to_string(&plain).unwrap(), SAMPLE);
}

fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

// Sizes straddle the default 8 KiB read buffer
const BOUNDARY_SIZES: [usize; 5] = [8191, 8192, 8193, 16 * 1024 + 5, 1024 * 1024];

#[test]
fn test_two_path_roundtrip_across_buffer_boundaries() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let pw = password("boundary");

    for len in BOUNDARY_SIZES {
        let content = patterned(len);
        let plain = dir.path().join(format!("plain-{len}.bin"));
        let enc = dir.path().join(format!("plain-{len}.aes"));
        let dec = dir.path().join(format!("plain-{len}.out"));
        fs::write(&plain, &content).unwrap();

        encrypt_file_with(&plain, &enc, &pw, &config).unwrap();
        let size = decrypt_file_with(&enc, &dec, &pw, &config)
            .unwrap_or_else(|e| panic!("decrypt of {len} bytes failed: {e}"));

        assert_eq!(size, len as u64);
        assert_eq!(fs::read(&dec).unwrap(), content, "content mismatch at {len} bytes");
    }
}

#[test]
fn test_in_place_roundtrip_across_buffer_boundaries() {
    let config = fast_config();
    let dir = tempdir().unwrap();
    let pw = password("boundary");

    for len in BOUNDARY_SIZES {
        let content = patterned(len);
        let path = dir.path().join(format!("file-{len}.bin"));
        fs::write(&path, &content).unwrap();

        encrypt_file_in_place_with(&path, &pw, &config).unwrap();
        assert_ne!(fs::read(&path).unwrap(), content);
        decrypt_file_in_place_with(&path, &pw, &config)
            .unwrap_or_else(|e| panic!("in-place decrypt of {len} bytes failed: {e}"));

        assert_eq!(fs::read(&path).unwrap(), content, "content mismatch at {len} bytes");
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), BOUNDARY_SIZES.len());
}

#[cfg(unix)]
#[test]
fn test_in_place_keeps_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let config = fast_config();
    let dir = tempdir().unwrap();
    let path = dir.path().join("shared.txt");
    fs::write(&path, SAMPLE).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    encrypt_file_in_place_with(&path, &password("pw"), &config).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}
