//! Block padding for the plaintext secret.
//!
//! Both schemes append `BLOCK_LEN - (len % BLOCK_LEN)` bytes, so a
//! block-aligned input always gains one full block.

use common::{CryptoError, BLOCK_LEN};

use crate::config::Padding;

/// Number of pad bytes appended to a plaintext of `len` bytes (1..=16).
pub fn pad_len(len: usize) -> usize {
    BLOCK_LEN - (len % BLOCK_LEN)
}

/// Return `data` padded to a multiple of [`BLOCK_LEN`].
pub fn pad(data: &[u8], scheme: Padding) -> Vec<u8> {
    let n = pad_len(data.len());
    let fill = match scheme {
        Padding::Zero => 0u8,
        // n <= BLOCK_LEN so it fits in a byte.
        Padding::Pkcs7 => n as u8,
    };
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    out.resize(data.len() + n, fill);
    out
}

/// Return the unpadded prefix of a decrypted, block-aligned buffer.
///
/// The buffer is borrowed rather than truncated so the caller keeps ownership
/// of every plaintext byte and can zeroize it. For [`Padding::Zero`] every
/// trailing zero byte is removed, including any that belonged to the original
/// secret.
///
/// # Errors
///
/// Returns [`CryptoError::Padding`] if `data` is empty or not block-aligned,
/// or if PKCS#7 padding bytes are inconsistent.
pub fn unpad(data: &[u8], scheme: Padding) -> Result<&[u8], CryptoError> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::Padding(format!(
            "buffer of {} bytes is not block-aligned",
            data.len()
        )));
    }

    match scheme {
        Padding::Zero => {
            let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
            Ok(&data[..end])
        }
        Padding::Pkcs7 => {
            let n = data[data.len() - 1] as usize;
            if n == 0 || n > BLOCK_LEN {
                return Err(CryptoError::Padding("invalid PKCS#7 pad length".into()));
            }
            let start = data.len() - n;
            if data[start..].iter().any(|&b| b as usize != n) {
                return Err(CryptoError::Padding("inconsistent PKCS#7 pad bytes".into()));
            }
            Ok(&data[..start])
        }
    }
}
