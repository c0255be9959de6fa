//! Observer that turns model notifications into [`TabStripEvent`]s.
//!
//! [`EventRecorder`] buffers converted events; the owner drains them with
//! [`EventRecorder::drain_events`] and forwards or inspects them.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use tab_strip_config::TabStripConfig;

use super::protocol::{TabStripEvent, TabStripEventData};
use crate::contents::ContentsHandle;
use crate::observer::TabStripModelObserver;
use crate::tab_strip::{TabChangeType, TabReplaceType};

/// Records every notification it receives, optionally filtered by kind.
///
/// Register an `Rc<EventRecorder>` with
/// [`TabStripModel::add_observer`](crate::TabStripModel::add_observer).
pub struct EventRecorder {
    /// Optional subscription filter expressed as kind names.
    /// `None` means "record everything".
    subscription_filter: Option<HashSet<String>>,
    /// Oldest events are dropped past this many; 0 keeps everything
    history_limit: usize,
    event_buffer: RefCell<VecDeque<TabStripEvent>>,
}

impl EventRecorder {
    /// Create a new recorder.
    ///
    /// # Arguments
    /// * `subscriptions` - If `Some`, only events whose kind name is in the
    ///   set are recorded. If `None`, all events are recorded.
    pub fn new(subscriptions: Option<HashSet<String>>) -> Self {
        Self {
            subscription_filter: subscriptions,
            history_limit: 0,
            event_buffer: RefCell::new(VecDeque::new()),
        }
    }

    /// Recorder keeping at most `limit` events (0 = unlimited).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Unfiltered recorder using the configured history limit.
    pub fn from_config(config: &TabStripConfig) -> Self {
        Self::new(None).with_history_limit(config.event_history_limit)
    }

    /// Every kind name the recorder can produce, in notification order.
    pub fn kinds() -> &'static [&'static str] {
        &[
            "tab_inserted_at",
            "tab_closing_at",
            "tab_detached_at",
            "tab_deselected_at",
            "tab_selected_at",
            "tab_moved",
            "tab_changed_at",
            "tab_replaced_at",
            "tab_pinned_state_changed",
            "tab_mini_state_changed",
            "tab_blocked_state_changed",
            "tab_strip_empty",
            "tab_strip_model_deleted",
        ]
    }

    /// Drain all buffered events, returning them and clearing the buffer.
    pub fn drain_events(&self) -> Vec<TabStripEvent> {
        self.event_buffer.borrow_mut().drain(..).collect()
    }

    /// Kind names of the buffered events, oldest first, without draining.
    pub fn recorded_kinds(&self) -> Vec<String> {
        self.event_buffer
            .borrow()
            .iter()
            .map(|event| event.kind.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.event_buffer.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_buffer.borrow().is_empty()
    }

    fn record(&self, kind: &str, data: TabStripEventData) {
        if let Some(ref filter) = self.subscription_filter
            && !filter.contains(kind)
        {
            return;
        }

        let mut buf = self.event_buffer.borrow_mut();
        if self.history_limit > 0 && buf.len() == self.history_limit {
            buf.pop_front();
        }
        buf.push_back(TabStripEvent {
            kind: kind.to_string(),
            data,
        });
    }

    fn tab(&self, kind: &str, contents: &ContentsHandle, index: usize) {
        self.record(
            kind,
            TabStripEventData::Tab {
                title: contents.title(),
                index,
            },
        );
    }
}

impl TabStripModelObserver for EventRecorder {
    fn tab_inserted_at(&self, contents: &ContentsHandle, index: usize, foreground: bool) {
        self.record(
            "tab_inserted_at",
            TabStripEventData::TabInserted {
                title: contents.title(),
                index,
                foreground,
            },
        );
    }

    fn tab_closing_at(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_closing_at", contents, index);
    }

    fn tab_detached_at(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_detached_at", contents, index);
    }

    fn tab_deselected_at(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_deselected_at", contents, index);
    }

    fn tab_selected_at(
        &self,
        old_contents: Option<&ContentsHandle>,
        new_contents: &ContentsHandle,
        index: usize,
        user_gesture: bool,
    ) {
        self.record(
            "tab_selected_at",
            TabStripEventData::TabSelected {
                old_title: old_contents.map(|contents| contents.title()),
                title: new_contents.title(),
                index,
                user_gesture,
            },
        );
    }

    fn tab_moved(&self, contents: &ContentsHandle, from_index: usize, to_index: usize) {
        self.record(
            "tab_moved",
            TabStripEventData::TabMoved {
                title: contents.title(),
                from_index,
                to_index,
            },
        );
    }

    fn tab_changed_at(&self, contents: &ContentsHandle, index: usize, change: TabChangeType) {
        self.record(
            "tab_changed_at",
            TabStripEventData::TabChanged {
                title: contents.title(),
                index,
                change,
            },
        );
    }

    fn tab_replaced_at(
        &self,
        old_contents: &ContentsHandle,
        new_contents: &ContentsHandle,
        index: usize,
        replace_type: TabReplaceType,
    ) {
        self.record(
            "tab_replaced_at",
            TabStripEventData::TabReplaced {
                old_title: old_contents.title(),
                title: new_contents.title(),
                index,
                replace_type,
            },
        );
    }

    fn tab_pinned_state_changed(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_pinned_state_changed", contents, index);
    }

    fn tab_mini_state_changed(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_mini_state_changed", contents, index);
    }

    fn tab_blocked_state_changed(&self, contents: &ContentsHandle, index: usize) {
        self.tab("tab_blocked_state_changed", contents, index);
    }

    fn tab_strip_empty(&self) {
        self.record("tab_strip_empty", TabStripEventData::Empty {});
    }

    fn tab_strip_model_deleted(&self) {
        self.record("tab_strip_model_deleted", TabStripEventData::Empty {});
    }
}
