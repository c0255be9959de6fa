//! Option sets and enums passed to tab strip operations.

use serde::{Deserialize, Serialize};

/// Options for inserting a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddTabFlags {
    /// Make the new tab the active tab
    pub active: bool,
    /// Pin the new tab
    pub pinned: bool,
    /// Use the supplied index instead of asking the order controller.
    /// Only meaningful for `add_tab`; `insert_tab_at` always uses the index
    /// it is given, subject to the mini-tab constraint.
    pub force_index: bool,
    /// Record the active tab as the new tab's opener (group relationship)
    pub inherit_group: bool,
    /// Record the active tab as the new tab's opener
    pub inherit_opener: bool,
}

impl AddTabFlags {
    pub const NONE: AddTabFlags = AddTabFlags {
        active: false,
        pinned: false,
        force_index: false,
        inherit_group: false,
        inherit_opener: false,
    };

    pub const ACTIVE: AddTabFlags = AddTabFlags {
        active: true,
        ..AddTabFlags::NONE
    };

    pub const PINNED: AddTabFlags = AddTabFlags {
        pinned: true,
        ..AddTabFlags::NONE
    };

    pub const FORCE_INDEX: AddTabFlags = AddTabFlags {
        force_index: true,
        ..AddTabFlags::NONE
    };

    /// Union of two flag sets.
    pub const fn with(self, other: AddTabFlags) -> AddTabFlags {
        AddTabFlags {
            active: self.active || other.active,
            pinned: self.pinned || other.pinned,
            force_index: self.force_index || other.force_index,
            inherit_group: self.inherit_group || other.inherit_group,
            inherit_opener: self.inherit_opener || other.inherit_opener,
        }
    }

    /// Whether the new tab should remember the active tab as its opener.
    pub fn inherits_opener(&self) -> bool {
        self.inherit_group || self.inherit_opener
    }
}

/// Options for closing a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseTabFlags {
    /// The close was requested by the user
    pub user_gesture: bool,
    /// Record the tab in the recently-closed history
    pub create_historical_tab: bool,
}

impl CloseTabFlags {
    pub const NONE: CloseTabFlags = CloseTabFlags {
        user_gesture: false,
        create_historical_tab: false,
    };

    pub const USER_GESTURE: CloseTabFlags = CloseTabFlags {
        user_gesture: true,
        create_historical_tab: false,
    };

    pub const CREATE_HISTORICAL_TAB: CloseTabFlags = CloseTabFlags {
        user_gesture: false,
        create_historical_tab: true,
    };

    /// Union of two flag sets.
    pub const fn with(self, other: CloseTabFlags) -> CloseTabFlags {
        CloseTabFlags {
            user_gesture: self.user_gesture || other.user_gesture,
            create_historical_tab: self.create_historical_tab || other.create_historical_tab,
        }
    }
}

/// What changed about a tab, passed along with `tab_changed_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabChangeType {
    /// Only the loading state changed
    LoadingOnly,
    /// Only the title changed and the page isn't loading
    TitleNotLoading,
    /// Anything else
    All,
}

/// Why a tab's contents were replaced in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabReplaceType {
    /// The contents were swapped for a lightweight placeholder
    Phantom,
    /// A preview was committed as the tab's contents
    MatchPreview,
}
