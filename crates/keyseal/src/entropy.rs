//! Source of the random salt and IV bytes.
//!
//! Sealing draws exactly two values per call, in order: the salt, then the IV.

use common::CryptoError;
use rand::{rngs::OsRng, RngCore};

/// A cryptographically secure byte source.
#[cfg_attr(test, mockall::automock)]
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EntropyUnavailable`] if the source cannot supply
    /// bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))
    }
}

/// Draw a fixed-size array from `source`.
pub(crate) fn draw<const N: usize, E: EntropySource + ?Sized>(
    source: &mut E,
) -> Result<[u8; N], CryptoError> {
    let mut buf = [0u8; N];
    source.fill_bytes(&mut buf)?;
    Ok(buf)
}
