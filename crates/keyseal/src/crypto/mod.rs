//! Key derivation, padding and AES-256-CBC primitives.
//!
//! This module has no knowledge of the output record or of configuration
//! loading; it provides the building blocks [`crate::sealer`] composes.
//!
//! # Ciphertext layout
//!
//! ```text
//! IV (16 bytes) ‖ AES-256-CBC(key, IV, pad(secret))
//! ```

pub mod cipher;
pub mod kdf;
pub mod padding;

pub use kdf::{derive_key, DerivedKey};

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;
