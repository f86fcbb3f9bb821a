//! Devkit - a small toolbox of developer utilities
//!
//! This crate provides:
//! - Ed25519 SSH key generation with OpenSSH-style text output
//! - Basic Auth credential generation (header, htpasswd line, example URL)
//! - Clipboard integration for the generated values

pub mod basic_auth;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod keygen;

pub use error::{DevkitError, Result};
