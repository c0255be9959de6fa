//! Observer contract and the registration list the model dispatches through.
//!
//! Every mutation of a [`TabStripModel`](crate::TabStripModel) is committed
//! first and announced afterwards, so an observer always sees a consistent
//! model. Notifications are delivered synchronously, in registration order.

use std::rc::Rc;

use crate::contents::ContentsHandle;
use crate::tab_strip::{TabChangeType, TabReplaceType};

/// Receives tab strip notifications.
///
/// Every method defaults to a no-op, so implementers only override what they
/// care about. Handlers must not mutate the tab that is being reported on
/// while its own notification is being delivered.
pub trait TabStripModelObserver {
    /// `contents` was inserted at `index`. `foreground` is whether it was
    /// opened as the active tab.
    fn tab_inserted_at(&self, _contents: &ContentsHandle, _index: usize, _foreground: bool) {}

    /// `contents` at `index` is being closed and will be destroyed.
    fn tab_closing_at(&self, _contents: &ContentsHandle, _index: usize) {}

    /// `contents` at `index` was removed from the strip.
    fn tab_detached_at(&self, _contents: &ContentsHandle, _index: usize) {}

    /// `contents` at `index` is about to stop being the active tab.
    fn tab_deselected_at(&self, _contents: &ContentsHandle, _index: usize) {}

    /// The active tab changed from `old_contents` to `new_contents`, now at
    /// `index`. `user_gesture` is whether a user input caused the change.
    fn tab_selected_at(
        &self,
        _old_contents: Option<&ContentsHandle>,
        _new_contents: &ContentsHandle,
        _index: usize,
        _user_gesture: bool,
    ) {
    }

    /// `contents` moved in place from `from_index` to `to_index`.
    fn tab_moved(&self, _contents: &ContentsHandle, _from_index: usize, _to_index: usize) {}

    /// `contents` at `index` changed in some way.
    fn tab_changed_at(&self, _contents: &ContentsHandle, _index: usize, _change: TabChangeType) {}

    /// The contents at `index` were swapped from `old_contents` to
    /// `new_contents` without a detach/insert cycle.
    fn tab_replaced_at(
        &self,
        _old_contents: &ContentsHandle,
        _new_contents: &ContentsHandle,
        _index: usize,
        _replace_type: TabReplaceType,
    ) {
    }

    /// The pinned state of the tab at `index` changed.
    fn tab_pinned_state_changed(&self, _contents: &ContentsHandle, _index: usize) {}

    /// The mini state (pinned or app) of the tab at `index` changed. Sent
    /// after `tab_pinned_state_changed` when pinning also changed mini-ness.
    fn tab_mini_state_changed(&self, _contents: &ContentsHandle, _index: usize) {}

    /// The tab at `index` became blocked or unblocked by a modal dialog.
    fn tab_blocked_state_changed(&self, _contents: &ContentsHandle, _index: usize) {}

    /// The last tab was removed. Hosts typically close the window.
    fn tab_strip_empty(&self) {}

    /// The model is being dropped; release anything tied to it.
    fn tab_strip_model_deleted(&self) {}
}

/// Ordered, duplicate-free list of observers.
#[derive(Default)]
pub struct ObserverList {
    observers: Vec<Rc<dyn TabStripModelObserver>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`. Returns false (and changes nothing) if it is
    /// already registered.
    pub fn add(&mut self, observer: Rc<dyn TabStripModelObserver>) -> bool {
        if self.contains(&observer) {
            log::debug!("Observer already registered, ignoring");
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Unregister `observer`. Returns whether it was registered.
    pub fn remove(&mut self, observer: &Rc<dyn TabStripModelObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        self.observers.len() != before
    }

    pub fn contains(&self, observer: &Rc<dyn TabStripModelObserver>) -> bool {
        self.observers.iter().any(|o| same_observer(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one notification to every observer, in registration order.
    pub fn notify(&self, mut deliver: impl FnMut(&dyn TabStripModelObserver)) {
        log::trace!("Notifying {} observers", self.observers.len());
        for observer in &self.observers {
            deliver(observer.as_ref());
        }
    }
}

fn same_observer(a: &Rc<dyn TabStripModelObserver>, b: &Rc<dyn TabStripModelObserver>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
