//! Typed error variants for the tab-strip-config crate.
//!
//! `TabStripConfig::load` and friends return `anyhow::Result`; the errors
//! they produce are `ConfigError` values, so callers that care can match on
//! the failure mode instead of an opaque string.
//!
//! # Example
//!
//! ```rust,no_run
//! use tab_strip_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML error: {p}"),
//!         }
//!     }
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML, or the config could not be
    /// serialized back to YAML.
    #[error("YAML error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
