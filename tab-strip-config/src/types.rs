//! Tab placement and logging configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Insertion Types
// ============================================================================

/// Where foreground tabs are inserted relative to the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPolicy {
    /// New tabs land immediately after the active tab (default)
    #[default]
    InsertAfterActive,
    /// New tabs land immediately before the active tab
    InsertBeforeActive,
}

impl InsertionPolicy {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InsertionPolicy::InsertAfterActive => "After active tab",
            InsertionPolicy::InsertBeforeActive => "Before active tab",
        }
    }
}

/// How a navigation that opened a tab was initiated.
///
/// The discriminants are the stable core codes used by hosts that pass
/// transitions around as raw integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PageTransition {
    /// The user followed a link from another page
    #[default]
    Link = 0,
    /// The user typed the address
    Typed = 1,
    /// The user picked a bookmark or a suggestion
    AutoBookmark = 2,
    /// A subframe navigation not requested by the user
    AutoSubframe = 3,
    /// A subframe navigation requested by the user
    ManualSubframe = 4,
    /// The address was generated from a search suggestion
    Generated = 5,
    /// The page was opened as a start page
    StartPage = 6,
    /// A form was submitted
    FormSubmit = 7,
    /// The page was reloaded
    Reload = 8,
    /// A keyword search
    Keyword = 9,
    /// A visit generated by a keyword search
    KeywordGenerated = 10,
}

impl PageTransition {
    /// Mask selecting the core transition from a raw value. Higher bits carry
    /// qualifiers that do not affect placement.
    pub const CORE_MASK: u32 = 0xFF;

    /// Decode a raw transition value.
    ///
    /// Qualifier bits are ignored. Unknown core values decode to `Link` so a
    /// corrupt value never yields an unusable transition.
    pub fn from_raw(raw: u32) -> Self {
        match raw & Self::CORE_MASK {
            0 => PageTransition::Link,
            1 => PageTransition::Typed,
            2 => PageTransition::AutoBookmark,
            3 => PageTransition::AutoSubframe,
            4 => PageTransition::ManualSubframe,
            5 => PageTransition::Generated,
            6 => PageTransition::StartPage,
            7 => PageTransition::FormSubmit,
            8 => PageTransition::Reload,
            9 => PageTransition::Keyword,
            10 => PageTransition::KeywordGenerated,
            other => {
                log::warn!("Invalid page transition {}, treating as link", other);
                PageTransition::Link
            }
        }
    }

    /// Core name of the transition
    pub fn as_str(&self) -> &'static str {
        match self {
            PageTransition::Link => "link",
            PageTransition::Typed => "typed",
            PageTransition::AutoBookmark => "auto_bookmark",
            PageTransition::AutoSubframe => "auto_subframe",
            PageTransition::ManualSubframe => "manual_subframe",
            PageTransition::Generated => "generated",
            PageTransition::StartPage => "start_page",
            PageTransition::FormSubmit => "form_submit",
            PageTransition::Reload => "reload",
            PageTransition::Keyword => "keyword",
            PageTransition::KeywordGenerated => "keyword_generated",
        }
    }

    /// All transitions, in core-code order
    pub fn all() -> &'static [PageTransition] {
        &[
            PageTransition::Link,
            PageTransition::Typed,
            PageTransition::AutoBookmark,
            PageTransition::AutoSubframe,
            PageTransition::ManualSubframe,
            PageTransition::Generated,
            PageTransition::StartPage,
            PageTransition::FormSubmit,
            PageTransition::Reload,
            PageTransition::Keyword,
            PageTransition::KeywordGenerated,
        ]
    }

    /// Whether a navigation with this transition starts a new task, so that
    /// opener relationships recorded so far stop being meaningful.
    pub fn starts_new_task(&self) -> bool {
        matches!(
            self,
            PageTransition::Typed
                | PageTransition::AutoBookmark
                | PageTransition::Generated
                | PageTransition::Keyword
                | PageTransition::KeywordGenerated
                | PageTransition::StartPage
        )
    }

    /// Placement used when the config carries no override for this transition.
    ///
    /// Navigations that originate from the current page open next to it;
    /// everything the user starts from scratch goes to the end of the strip.
    pub fn default_placement(&self) -> TransitionPlacement {
        match self {
            PageTransition::Link
            | PageTransition::FormSubmit
            | PageTransition::AutoSubframe
            | PageTransition::ManualSubframe => TransitionPlacement::Adjacent,
            _ => TransitionPlacement::Append,
        }
    }
}

/// Where a tab opened with a given transition is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPlacement {
    /// Foreground opens go next to the active tab (per the insertion policy);
    /// background opens are appended
    Adjacent,
    /// Always appended at the end of the strip
    Append,
}

// ============================================================================
// Logging Types
// ============================================================================

/// Log level for the debug log bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
