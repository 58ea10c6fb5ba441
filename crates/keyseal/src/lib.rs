//! `keyseal` — seal an API key under a password.
//!
//! A key is derived from the password with PBKDF2 (HMAC-SHA-256, 10,000
//! iterations by default) over a fresh 16-byte salt, and the API key is
//! encrypted with AES-256-CBC under a fresh 16-byte IV. The result is a
//! [`SealedApiKey`] holding `base64(IV ‖ ciphertext)` and `base64(salt)`.
//!
//! ```no_run
//! let sealed = keyseal::seal_api_key("hunter2", "AKCp8jQ")?;
//! println!("{}", sealed.to_json()?);
//! # Ok::<(), keyseal::CryptoError>(())
//! ```
//!
//! CBC is unauthenticated and the default zero-byte padding cannot represent
//! secrets that end in `\0`. Both are kept for output compatibility.

pub mod config;
pub mod crypto;
pub mod entropy;
pub mod sealer;
pub mod telemetry;

pub use common::{CryptoError, SealedApiKey};
pub use config::{KdfHash, Padding, SealConfig};
pub use entropy::{EntropySource, OsEntropy};
pub use sealer::{open_api_key, seal_api_key, Sealer};
