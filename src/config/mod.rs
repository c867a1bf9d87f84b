// src/config/mod.rs
//! Configuration system for file-protector
//!
//! Built-in defaults, optionally overlaid by a TOML file and then by
//! environment variables. Loading returns a value; nothing is cached
//! process-wide.

pub use app::{Config, CryptoSettings, PathSettings};

mod app;
mod defaults;
