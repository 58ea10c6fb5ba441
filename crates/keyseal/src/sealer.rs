//! Derive-then-encrypt: the sealing routine and its inverse.

use common::{CryptoError, SealedApiKey, BLOCK_LEN, IV_LEN, SALT_LEN};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use crate::config::SealConfig;
use crate::crypto::{cipher, derive_key, padding};
use crate::entropy::{self, EntropySource, OsEntropy};

/// Seals API keys under a password with a fixed configuration.
///
/// Each [`Sealer::seal`] call draws a fresh salt and IV from the entropy
/// source; nothing is carried between calls.
#[derive(Debug, Clone)]
pub struct Sealer<E = OsEntropy> {
    config: SealConfig,
    entropy: E,
}

impl Sealer<OsEntropy> {
    /// Create a sealer backed by the operating system CSPRNG.
    pub fn new(config: SealConfig) -> Self {
        Self::with_entropy(config, OsEntropy)
    }
}

impl Default for Sealer<OsEntropy> {
    fn default() -> Self {
        Self::new(SealConfig::default())
    }
}

impl<E: EntropySource> Sealer<E> {
    /// Create a sealer drawing salt and IV bytes from `entropy`.
    pub fn with_entropy(config: SealConfig, entropy: E) -> Self {
        Self { config, entropy }
    }

    pub fn config(&self) -> &SealConfig {
        &self.config
    }

    /// Encrypt `api_key` under a key derived from `password`.
    ///
    /// The salt is drawn before the IV.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EmptyInput`] if either input is empty, and
    /// propagates entropy, derivation and cipher failures unchanged.
    #[instrument(
        skip_all,
        fields(kdf_hash = ?self.config.kdf_hash, kdf_iterations = self.config.kdf_iterations)
    )]
    pub fn seal(&mut self, password: &str, api_key: &str) -> Result<SealedApiKey, CryptoError> {
        if password.is_empty() {
            return Err(CryptoError::EmptyInput("password"));
        }
        if api_key.is_empty() {
            return Err(CryptoError::EmptyInput("api_key"));
        }

        let salt: [u8; SALT_LEN] = entropy::draw(&mut self.entropy)?;
        let key = derive_key(password, &salt, &self.config)?;
        let iv: [u8; IV_LEN] = entropy::draw(&mut self.entropy)?;

        let padded = Zeroizing::new(padding::pad(api_key.as_bytes(), self.config.padding));
        let ciphertext = cipher::encrypt_blocks(&padded, key.as_bytes(), &iv)?;

        debug!(blocks = ciphertext.len() / BLOCK_LEN, "api key sealed");
        Ok(SealedApiKey::from_parts(&iv, &ciphertext, &salt))
    }

    /// Recover the API key from `record` using `password`.
    ///
    /// With [`crate::config::Padding::Zero`] any trailing `\0` bytes of the
    /// original secret are lost.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedRecord`] if the record cannot be
    /// decoded. A wrong password is not reliably detected: it surfaces as
    /// [`CryptoError::Padding`] or [`CryptoError::Encoding`] at best, and as a
    /// garbage string otherwise.
    #[instrument(skip_all, fields(kdf_iterations = self.config.kdf_iterations))]
    pub fn open(&self, password: &str, record: &SealedApiKey) -> Result<String, CryptoError> {
        let decoded = record.decode()?;
        let key = derive_key(password, &decoded.salt, &self.config)?;

        let padded = Zeroizing::new(cipher::decrypt_blocks(
            &decoded.ciphertext,
            key.as_bytes(),
            &decoded.iv,
        )?);
        let plaintext = padding::unpad(&padded, self.config.padding)?;

        let api_key = String::from_utf8(plaintext.to_vec()).map_err(|e| {
            drop(Zeroizing::new(e.into_bytes()));
            CryptoError::Encoding("decrypted api key is not valid UTF-8".into())
        })?;

        debug!("api key opened");
        Ok(api_key)
    }
}

/// Seal `api_key` under `password` with default parameters and OS randomness.
///
/// # Errors
///
/// See [`Sealer::seal`].
pub fn seal_api_key(password: &str, api_key: &str) -> Result<SealedApiKey, CryptoError> {
    Sealer::default().seal(password, api_key)
}

/// Open a record produced by [`seal_api_key`].
///
/// # Errors
///
/// See [`Sealer::open`].
pub fn open_api_key(password: &str, record: &SealedApiKey) -> Result<String, CryptoError> {
    Sealer::default().open(password, record)
}
