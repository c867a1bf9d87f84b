// src/bin/file_protector.rs
//! file-protector CLI — encrypt, decrypt, sign and verify files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use file_protector::util::{file_digests, sha256_hex};
use file_protector::{FilePassword, FileProtector};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "file-protector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Password-based file encryption and RSA file signatures")]
struct Cli {
    /// Read the password from this environment variable instead of prompting
    #[arg(long, global = true, value_name = "VAR")]
    password_env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt a file (in place unless --output is given)
    Encrypt {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Decrypt a file (in place unless --output is given)
    Decrypt {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate an RSA key pair as DER files
    Keygen {
        #[arg(long, value_name = "PATH")]
        private_key: PathBuf,
        #[arg(long, value_name = "PATH")]
        public_key: PathBuf,
    },
    /// Sign a file with a private key
    Sign {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, value_name = "PATH")]
        private_key: PathBuf,
        #[arg(long, value_name = "PATH")]
        signature: PathBuf,
    },
    /// Verify a file signature (exit status 1 when not verified)
    Verify {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, value_name = "PATH")]
        public_key: PathBuf,
        #[arg(long, value_name = "PATH")]
        signature: PathBuf,
    },
    /// Print SHA-1, SHA-256 and BLAKE3 digests of a file
    Hash {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print the SHA-256 digest of a string
    HashString {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let protector = FileProtector::from_env().context("Failed to load configuration")?;

    match cli.command {
        Command::Encrypt { file, output } => {
            let password = read_password(cli.password_env.as_deref(), &file)?;
            let size = match output {
                Some(out) => protector.encrypt_file(&file, &out, &password),
                None => protector.encrypt_file_in_place(&file, &password),
            }
            .with_context(|| failed("encrypt", &file))?;
            println!("Encrypted {} ({size} bytes)", file.display());
        }
        Command::Decrypt { file, output } => {
            let password = read_password(cli.password_env.as_deref(), &file)?;
            let size = match output {
                Some(out) => protector.decrypt_file(&file, &out, &password),
                None => protector.decrypt_file_in_place(&file, &password),
            }
            .with_context(|| failed("decrypt", &file))?;
            println!("Decrypted {} ({size} bytes)", file.display());
        }
        Command::Keygen {
            private_key,
            public_key,
        } => {
            protector
                .generate_keys(&private_key, &public_key)
                .context("Key generation failed")?;
            println!(
                "Wrote {}-bit key pair: {} / {}",
                protector.config().crypto.rsa_key_bits,
                private_key.display(),
                public_key.display()
            );
        }
        Command::Sign {
            file,
            private_key,
            signature,
        } => {
            let sig = protector
                .sign_file(&file, &private_key, &signature)
                .with_context(|| failed("sign", &file))?;
            println!("{}", sig.to_base64());
        }
        Command::Verify {
            file,
            public_key,
            signature,
        } => {
            let verified = protector
                .verify_file(&file, &public_key, &signature)
                .with_context(|| failed("verify", &file))?;
            if !verified {
                println!("NOT VERIFIED: {}", file.display());
                return Ok(ExitCode::FAILURE);
            }
            println!("Verified: {}", file.display());
        }
        Command::Hash { file } => {
            let digests = file_digests(&file)
                .with_context(|| failed("hash", &file))?;
            println!("sha1    {}", digests.sha1);
            println!("sha256  {}", digests.sha256);
            println!("blake3  {}", digests.blake3);
            println!("size    {}", digests.size_bytes);
        }
        Command::HashString { text } => {
            println!("{}", sha256_hex(&text));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Neutral context line; the underlying error supplies the cause
fn failed(action: &str, file: &Path) -> String {
    format!("Failed to {action} {}", file.display())
}

fn read_password(env_var: Option<&str>, file: &Path) -> Result<FilePassword> {
    let raw = match env_var {
        Some(name) => {
            info!(var = name, "reading password from environment");
            std::env::var(name).with_context(|| format!("{name} is not set"))?
        }
        None => rpassword::prompt_password(format!("Password for {}: ", file.display()))?,
    };
    let raw = raw.trim_end_matches(|c: char| c == '\r' || c == '\n').to_owned();
    if raw.is_empty() {
        bail!("Refusing to use an empty password");
    }
    Ok(FilePassword::new(raw))
}
