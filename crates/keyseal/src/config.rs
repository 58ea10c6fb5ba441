//! Sealing parameters and their loading from the environment.
//!
//! Every field has a default that reproduces the reference output format:
//! PBKDF2-HMAC-SHA-256, 10,000 iterations, zero-byte padding. Overrides are
//! read from `KEYSEAL_*` environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Hash function underlying the PBKDF2 HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KdfHash {
    #[default]
    Sha256,
    Sha512,
}

/// Scheme used to pad the secret to a whole number of AES blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Trailing zero bytes. Not reversible for secrets ending in `\0`.
    #[default]
    Zero,
    /// PKCS#7.
    Pkcs7,
}

/// Validated sealing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SealConfig {
    /// PBKDF2 PRF hash.
    #[serde(default)]
    pub kdf_hash: KdfHash,

    /// PBKDF2 iteration count.
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,

    /// Plaintext padding scheme.
    #[serde(default)]
    pub padding: Padding,

    /// Tracing log level (e.g. `"info"`, `"debug"`), applied by
    /// [`crate::telemetry::init_from_config`].
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_kdf_iterations() -> u32 {
    10_000
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for SealConfig {
    fn default() -> Self {
        Self {
            kdf_hash: KdfHash::default(),
            kdf_iterations: default_kdf_iterations(),
            padding: Padding::default(),
            log_level: default_log_level(),
        }
    }
}

impl SealConfig {
    /// Load and validate configuration from `KEYSEAL_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        Self::load(config::Config::builder().add_source(config::Environment::with_prefix("KEYSEAL")))
    }

    fn load(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to build keyseal configuration")?;

        let c: SealConfig = cfg
            .try_deserialize()
            .context("failed to deserialise keyseal configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    pub fn validate(&self) -> Result<()> {
        if self.kdf_iterations == 0 {
            anyhow::bail!("KEYSEAL_KDF_ITERATIONS must be > 0");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("KEYSEAL_LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}
