//! AES-256-CBC over pre-padded, block-aligned buffers.
//!
//! Padding is applied by the caller (see [`super::padding`]); this layer only
//! accepts input whose length is a non-zero multiple of [`BLOCK_LEN`].
//!
//! **CBC carries no authentication tag.** Tampered ciphertext decrypts to
//! garbage rather than failing; integrity must come from elsewhere.

use aes::Aes256;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use common::{CryptoError, BLOCK_LEN, IV_LEN};

use super::KEY_LEN;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt a block-aligned buffer with AES-256-CBC.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes
/// and [`CryptoError::Padding`] if `padded` is empty or not block-aligned.
pub fn encrypt_blocks(
    padded: &[u8],
    key: &[u8],
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, CryptoError> {
    ensure_aligned(padded)?;
    let enc = build_encryptor(key, iv)?;

    let mut buf = padded.to_vec();
    let len = buf.len();
    enc.encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| CryptoError::Padding("cipher rejected buffer length".into()))?;
    Ok(buf)
}

/// Decrypt a block-aligned AES-256-CBC ciphertext, returning the still-padded
/// plaintext.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes
/// and [`CryptoError::Padding`] if `ciphertext` is empty or not block-aligned.
pub fn decrypt_blocks(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, CryptoError> {
    ensure_aligned(ciphertext)?;
    let dec = build_decryptor(key, iv)?;

    let mut buf = ciphertext.to_vec();
    let plain_len = dec
        .decrypt_padded_mut::<NoPadding>(&mut buf)
        .map_err(|_| CryptoError::Padding("cipher rejected buffer length".into()))?
        .len();
    buf.truncate(plain_len);
    Ok(buf)
}

fn build_encryptor(key: &[u8], iv: &[u8; IV_LEN]) -> Result<Aes256CbcEnc, CryptoError> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::InvalidKeyLength);
    }
    Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLength)
}

fn build_decryptor(key: &[u8], iv: &[u8; IV_LEN]) -> Result<Aes256CbcDec, CryptoError> {
    if key.len() != KEY_LEN {
        return Err(CryptoError::InvalidKeyLength);
    }
    Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLength)
}

fn ensure_aligned(data: &[u8]) -> Result<(), CryptoError> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::Padding(format!(
            "expected a non-zero multiple of {BLOCK_LEN} bytes, got {}",
            data.len()
        )));
    }
    Ok(())
}
