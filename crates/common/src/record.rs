//! The sealed API key record returned to callers.
//!
//! The JSON shape is `{"encryptedValue": "...", "salt": "..."}` where
//! `encryptedValue` is `base64(IV ‖ ciphertext)` and `salt` is `base64(salt)`,
//! both in the standard alphabet with `=` padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Byte length of the PBKDF2 salt.
pub const SALT_LEN: usize = 16;

/// Byte length of the CBC initialisation vector.
pub const IV_LEN: usize = 16;

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Output of sealing an API key under a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedApiKey {
    /// Base64 of the IV followed by the CBC ciphertext.
    #[serde(rename = "encryptedValue")]
    pub encrypted_value: String,
    /// Base64 of the salt used for key derivation.
    pub salt: String,
}

impl SealedApiKey {
    /// Build a record from raw IV, ciphertext and salt bytes.
    pub fn from_parts(iv: &[u8; IV_LEN], ciphertext: &[u8], salt: &[u8; SALT_LEN]) -> Self {
        let mut joined = Vec::with_capacity(IV_LEN + ciphertext.len());
        joined.extend_from_slice(iv);
        joined.extend_from_slice(ciphertext);
        Self {
            encrypted_value: STANDARD.encode(joined),
            salt: STANDARD.encode(salt),
        }
    }

    /// Decode both fields and check their shape.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedRecord`] if either field is not valid
    /// base64, if the salt is not [`SALT_LEN`] bytes, or if the encrypted value
    /// is shorter than one IV plus one block or not block-aligned.
    pub fn decode(&self) -> Result<DecodedRecord, CryptoError> {
        let salt_bytes = STANDARD
            .decode(&self.salt)
            .map_err(|e| CryptoError::MalformedRecord(format!("salt is not base64: {e}")))?;
        let salt: [u8; SALT_LEN] = salt_bytes.as_slice().try_into().map_err(|_| {
            CryptoError::MalformedRecord(format!(
                "salt must be {SALT_LEN} bytes, got {}",
                salt_bytes.len()
            ))
        })?;

        let joined = STANDARD.decode(&self.encrypted_value).map_err(|e| {
            CryptoError::MalformedRecord(format!("encryptedValue is not base64: {e}"))
        })?;
        if joined.len() < IV_LEN + BLOCK_LEN || joined.len() % BLOCK_LEN != 0 {
            return Err(CryptoError::MalformedRecord(format!(
                "encryptedValue must be a multiple of {BLOCK_LEN} bytes and at least {}, got {}",
                IV_LEN + BLOCK_LEN,
                joined.len()
            )));
        }

        let (iv_bytes, ciphertext) = joined.split_at(IV_LEN);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(iv_bytes);

        Ok(DecodedRecord {
            salt,
            iv,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Serialise to the JSON object form.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Encoding`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, CryptoError> {
        serde_json::to_string(self).map_err(|e| CryptoError::Encoding(e.to_string()))
    }

    /// Parse the JSON object form.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedRecord`] if `s` is not a JSON object
    /// with both string fields.
    pub fn from_json(s: &str) -> Result<Self, CryptoError> {
        serde_json::from_str(s).map_err(|e| CryptoError::MalformedRecord(e.to_string()))
    }
}

/// Raw bytes recovered from a [`SealedApiKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    /// Block-aligned, non-empty ciphertext.
    pub ciphertext: Vec<u8>,
}
