//! The `TabStripConfig` document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{InsertionPolicy, LogLevel, PageTransition, TransitionPlacement};

/// Tab strip configuration.
///
/// Every field has a default, so a partial (or empty) YAML document is a
/// valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabStripConfig {
    /// Where foreground tabs are inserted relative to the active tab
    #[serde(default)]
    pub insertion_policy: InsertionPolicy,

    /// Per-transition overrides of the default placement table.
    ///
    /// Transitions without an entry use [`PageTransition::default_placement`].
    #[serde(default)]
    pub transition_placement: BTreeMap<PageTransition, TransitionPlacement>,

    /// Maximum number of events an `EventRecorder` buffers (0 = unlimited)
    #[serde(default = "crate::defaults::event_history_limit")]
    pub event_history_limit: usize,

    /// Verbosity of the debug log bridge
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for TabStripConfig {
    fn default() -> Self {
        Self {
            insertion_policy: InsertionPolicy::default(),
            transition_placement: BTreeMap::new(),
            event_history_limit: crate::defaults::event_history_limit(),
            log_level: LogLevel::default(),
        }
    }
}

impl TabStripConfig {
    /// Effective placement for `transition`, honouring overrides.
    pub fn placement_for(&self, transition: PageTransition) -> TransitionPlacement {
        self.transition_placement
            .get(&transition)
            .copied()
            .unwrap_or_else(|| transition.default_placement())
    }

    /// The full placement table with overrides applied, one entry per
    /// transition.
    pub fn placement_table(&self) -> BTreeMap<PageTransition, TransitionPlacement> {
        PageTransition::all()
            .iter()
            .map(|t| (*t, self.placement_for(*t)))
            .collect()
    }
}
