//! Configuration system for the tab-strip tab collection model.
//!
//! This crate provides configuration loading, saving, and default values
//! for the tab strip. It includes:
//!
//! - Insertion policy and page-transition placement types
//! - The transition placement table consulted by the order controller
//! - Log level selection for the log bridge
//! - YAML persistence with atomic writes

pub mod config;
pub mod defaults;
pub mod error;
mod persistence;
pub mod types;

pub use config::TabStripConfig;
pub use error::ConfigError;
pub use types::{InsertionPolicy, LogLevel, PageTransition, TransitionPlacement};
