//! Common error types shared across crates.

use thiserror::Error;

/// Failure raised when key derivation, encryption or decryption cannot complete.
///
/// Messages never carry password, key or plaintext material; callers may log
/// them as-is.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A required text input was empty. Holds the input's name.
    #[error("empty input: {0} must not be empty")]
    EmptyInput(&'static str),

    /// The random source could not produce bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Key derivation parameters were rejected by the primitive.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The cipher rejected the key or IV length.
    #[error("invalid key or IV length")]
    InvalidKeyLength,

    /// Padding could not be applied or removed.
    #[error("padding error: {0}")]
    Padding(String),

    /// A sealed record could not be decoded or has the wrong shape.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Decrypted bytes are not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl CryptoError {
    /// Short machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::EmptyInput(_) => "empty_input",
            CryptoError::EntropyUnavailable(_) => "entropy_unavailable",
            CryptoError::InvalidParameters(_) => "invalid_parameters",
            CryptoError::InvalidKeyLength => "invalid_key_length",
            CryptoError::Padding(_) => "padding",
            CryptoError::MalformedRecord(_) => "malformed_record",
            CryptoError::Encoding(_) => "encoding",
        }
    }

    /// Returns `true` when the error was caused by the caller's input rather
    /// than by the environment or a primitive.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CryptoError::EmptyInput(_) | CryptoError::MalformedRecord(_)
        )
    }
}
