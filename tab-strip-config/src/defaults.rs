//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `TabStripConfig` fields.

pub fn event_history_limit() -> usize {
    1024
}
