//! Tab collection model for a tabbed window.
//!
//! The crate owns the ordered list of tabs, which one is active, and which
//! are pinned or blocked, and keeps every view of the strip in sync through
//! an observer bridge. Rendering, input and the contents of the tabs belong
//! to the host.
//!
//! - [`TabStripModel`]: the collection and every mutation on it
//! - [`OrderController`]: where new tabs go and who is selected after a close
//! - [`TabStripModelObserver`]: notifications, delivered after each mutation
//! - [`TabStripModelDelegate`]: work the model hands back to its owner
//! - [`TabContents`]: what the model needs from the contents of a tab
//! - [`EventRecorder`]: an observer that records serializable events
//!
//! Configuration lives in the `tab-strip-config` crate and is re-exported
//! here.

pub mod contents;
pub mod debug;
pub mod delegate;
pub mod error;
pub mod events;
pub mod observer;
pub mod order_controller;
pub mod tab_strip;

pub use contents::{ContentsHandle, TabContents, same_contents};
pub use delegate::TabStripModelDelegate;
pub use error::TabStripError;
pub use events::{EventRecorder, TabStripEvent, TabStripEventData};
pub use observer::{ObserverList, TabStripModelObserver};
pub use order_controller::{DefaultOrderController, OrderController, StripState};
pub use tab_strip::{
    AddTabFlags, CloseTabFlags, ContextMenuCommand, TabChangeType, TabReplaceType, TabStripModel,
};

pub use tab_strip_config::{
    ConfigError, InsertionPolicy, LogLevel, PageTransition, TabStripConfig, TransitionPlacement,
};
