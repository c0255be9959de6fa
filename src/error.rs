//! Error types for the tab strip crate.
//!
//! Precondition violations on the model panic; this enum covers the
//! recoverable failures, which all come from parsing external input.

use thiserror::Error;

/// Errors produced by the tab strip crate.
#[derive(Debug, Error)]
pub enum TabStripError {
    /// A context menu action name that does not map to any command.
    #[error("unknown context menu command: {0}")]
    UnknownCommand(String),
}
