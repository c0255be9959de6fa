//! The content handle contract.
//!
//! The tab strip never renders anything; it only needs a small capability
//! set from the object living inside each tab. Hosts wrap whatever they use
//! for a page, document or terminal in a type implementing [`TabContents`]
//! and hand the model an [`Rc`] to it.

use std::rc::Rc;

/// Shared handle to the contents of one tab.
///
/// Identity is pointer identity: two handles refer to the same contents when
/// [`same_contents`] returns true.
pub type ContentsHandle = Rc<dyn TabContents>;

/// Capabilities the tab strip needs from the contents of a tab.
///
/// Only [`is_app`](TabContents::is_app) is required. The remaining methods
/// have defaults so simple hosts (and tests) stay small.
pub trait TabContents {
    /// App contents are always pinned and can never be unpinned.
    fn is_app(&self) -> bool;

    /// Called exactly once, when the tab holding these contents is
    /// permanently closed. Detaching or replacing a tab does not call it.
    fn destroy(&self) {}

    /// Records whether the close was initiated by the user.
    fn set_closed_by_user_gesture(&self, _closed_by_user: bool) {}

    /// Whether a user gesture has already been recorded for the close.
    fn closed_by_user_gesture(&self) -> bool {
        false
    }

    /// Whether the contents are still loading.
    fn is_loading(&self) -> bool {
        false
    }

    /// Whether the context-menu reload command applies.
    fn can_reload(&self) -> bool {
        true
    }

    /// Reload the contents.
    fn reload(&self) {}

    /// Human readable label used in logs and recorded events.
    fn title(&self) -> String {
        String::new()
    }
}

/// Pointer identity for content handles.
///
/// Compares data pointers only, so two handles to the same allocation are
/// equal even if their vtables were instantiated in different codegen units.
pub fn same_contents(a: &ContentsHandle, b: &ContentsHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Page;

    impl TabContents for Page {
        fn is_app(&self) -> bool {
            false
        }
    }

    #[test]
    fn identity_is_pointer_identity() {
        let a: ContentsHandle = Rc::new(Page);
        let a2 = Rc::clone(&a);
        let b: ContentsHandle = Rc::new(Page);

        assert!(same_contents(&a, &a2));
        assert!(!same_contents(&a, &b));
    }

    #[test]
    fn default_capabilities() {
        let page = Page;
        assert!(!page.is_loading());
        assert!(page.can_reload());
        assert!(!page.closed_by_user_gesture());
        assert!(page.title().is_empty());
    }
}
