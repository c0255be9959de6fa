//! Serializable form of tab strip notifications.
//!
//! Each observer callback maps to one [`TabStripEvent`]. Contents are
//! reported by title, since handles themselves cannot leave the process.

use serde::{Deserialize, Serialize};

use crate::tab_strip::{TabChangeType, TabReplaceType};

/// One recorded notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabStripEvent {
    /// Event kind name (e.g., "tab_inserted_at", "tab_selected_at").
    pub kind: String,
    /// Event-specific payload.
    pub data: TabStripEventData,
}

impl TabStripEvent {
    /// Serialize as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Event-specific payload data.
///
/// Tagged with `data_type` so consumers can dispatch on the JSON without
/// looking at `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "data_type")]
pub enum TabStripEventData {
    /// Events without a payload (strip empty, model deleted).
    Empty {},

    /// A notification about a single tab at an index.
    Tab { title: String, index: usize },

    TabInserted {
        title: String,
        index: usize,
        foreground: bool,
    },

    TabSelected {
        /// Title of the previously active tab, if there was one.
        old_title: Option<String>,
        title: String,
        index: usize,
        user_gesture: bool,
    },

    TabMoved {
        title: String,
        from_index: usize,
        to_index: usize,
    },

    TabChanged {
        title: String,
        index: usize,
        change: TabChangeType,
    },

    TabReplaced {
        old_title: String,
        title: String,
        index: usize,
        replace_type: TabReplaceType,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_data_type_tag() {
        let event = TabStripEvent {
            kind: "tab_moved".to_string(),
            data: TabStripEventData::TabMoved {
                title: "docs".to_string(),
                from_index: 0,
                to_index: 2,
            },
        };
        let json = event.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "tab_moved");
        assert_eq!(value["data"]["data_type"], "TabMoved");
        assert_eq!(value["data"]["to_index"], 2);
    }

    #[test]
    fn change_type_is_snake_case() {
        let event = TabStripEvent {
            kind: "tab_changed_at".to_string(),
            data: TabStripEventData::TabChanged {
                title: "a".to_string(),
                index: 1,
                change: TabChangeType::TitleNotLoading,
            },
        };
        let parsed: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(parsed["data"]["change"], "title_not_loading");
    }

    #[test]
    fn empty_payload_parses_back() {
        let json = r#"{"kind":"tab_strip_empty","data":{"data_type":"Empty"}}"#;
        let event: TabStripEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.data, TabStripEventData::Empty {});
    }
}
