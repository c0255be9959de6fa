//! The delegate contract.
//!
//! A [`TabStripModel`](crate::TabStripModel) has exactly one delegate, which
//! performs the work the model cannot do itself: creating contents, talking
//! to the session history, running unload handlers. It is usually
//! implemented by whatever owns the window.
//!
//! Delegate methods are called while the model is in the middle of a
//! mutation. Implementations must not call back into the same model from
//! inside them; deferred work (such as finishing a close after unload
//! handlers ran) is re-driven by the host afterwards.

use crate::contents::ContentsHandle;

/// Operations the tab strip model delegates to its owner.
pub trait TabStripModelDelegate {
    /// Create what the delegate considers a blank tab. The model inserts the
    /// returned contents itself.
    fn add_blank_tab(&self, foreground: bool) -> ContentsHandle;

    /// Whether the contents at `index` can be duplicated.
    fn can_duplicate_at(&self, _index: usize) -> bool {
        false
    }

    /// Duplicate the contents at `index`.
    fn duplicate_at(&self, _index: usize) {}

    /// A drag session finished and the frame that started it should close.
    fn close_frame_after_drag_session(&self) {}

    /// Record `contents` in the recently-closed history.
    fn create_historical_tab(&self, _contents: &ContentsHandle) {}

    /// Run unload listeners before `contents` is closed.
    ///
    /// Returns true when listeners are pending; the model then leaves the tab
    /// in place and the host closes it again once the listeners finished.
    fn run_unload_listener_before_closing(&self, _contents: &ContentsHandle) -> bool {
        false
    }

    /// Whether a previously closed tab can be restored.
    fn can_restore_tab(&self) -> bool {
        false
    }

    /// Restore the most recently closed tab.
    fn restore_tab(&self) {}

    /// Whether the tab at `index` may be closed.
    fn can_close_at(&self, _index: usize) -> bool {
        true
    }

    /// Whether any tab may be closed.
    fn can_close_any(&self) -> bool {
        true
    }
}
