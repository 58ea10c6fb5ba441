//! Common types and errors shared across `keyseal` crates.

pub mod error;
pub mod record;

pub use error::CryptoError;
pub use record::{DecodedRecord, SealedApiKey, BLOCK_LEN, IV_LEN, SALT_LEN};
