//! Ed25519 SSH key generation and text encoding
//!
//! This module provides:
//! - Key pair generation with PKCS8/SPKI export (the platform crypto layer)
//! - Pure encoders from raw key bytes to the two SSH text artifacts
//! - A single-flight cache so repeated triggers share one generation

mod cache;
mod encoder;
mod generate;
mod secret;

pub use cache::KeygenCache;
pub use encoder::{encode_private_key, encode_public_key, public_key_from_spki};
pub use generate::{EncodedKeyPair, KeyPair};
pub use secret::SecretDer;

/// Length of a raw Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;
