//! Tracing subscriber setup for processes that embed `keyseal`.
//!
//! The library itself only emits `tracing` events. The owner of the process
//! loads a [`SealConfig`] and passes it to [`init_from_config`], which applies
//! its `log_level`:
//!
//! ```no_run
//! let cfg = keyseal::SealConfig::from_env()?;
//! keyseal::telemetry::init_from_config(&cfg)?;
//! let _sealer = keyseal::Sealer::new(cfg);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Telemetry invariants
//!
//! - **No password, key, IV or plaintext material** appears in any span or
//!   event field.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::SealConfig;

/// Initialise the subscriber at the level named by `cfg.log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init_from_config(cfg: &SealConfig) -> Result<()> {
    init(&cfg.log_level)
}

/// Initialise a JSON tracing subscriber at `log_level`.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise keyseal tracing subscriber: {e}"))
}
