//! PBKDF2 key derivation.

use common::{CryptoError, SALT_LEN};
use hmac::Hmac;
use sha2::{Sha256, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_LEN;
use crate::config::{KdfHash, SealConfig};

/// A 32-byte AES-256 key derived from a password.
///
/// The bytes live on the heap so moving the key never copies them, and they
/// are zeroized when the key is dropped.
pub struct DerivedKey(Box<[u8; KEY_LEN]>);

impl DerivedKey {
    /// Key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl ZeroizeOnDrop for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a key from `password` and `salt` with the configured PRF and
/// iteration count.
///
/// # Errors
///
/// Returns [`CryptoError::EmptyInput`] for an empty password and
/// [`CryptoError::InvalidParameters`] if the iteration count is zero or the
/// primitive rejects the output length.
pub fn derive_key(
    password: &str,
    salt: &[u8; SALT_LEN],
    config: &SealConfig,
) -> Result<DerivedKey, CryptoError> {
    if password.is_empty() {
        return Err(CryptoError::EmptyInput("password"));
    }
    if config.kdf_iterations == 0 {
        return Err(CryptoError::InvalidParameters(
            "kdf_iterations must be > 0".into(),
        ));
    }

    let mut key = DerivedKey(Box::new([0u8; KEY_LEN]));
    let rounds = config.kdf_iterations;
    let res = match config.kdf_hash {
        KdfHash::Sha256 => {
            pbkdf2::pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, rounds, &mut key.0[..])
        }
        KdfHash::Sha512 => {
            pbkdf2::pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt, rounds, &mut key.0[..])
        }
    };
    res.map_err(|e| CryptoError::InvalidParameters(format!("pbkdf2: {e}")))?;

    Ok(key)
}
