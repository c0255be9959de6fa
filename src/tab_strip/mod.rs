//! The tab collection model.
//!
//! [`TabStripModel`] owns the ordered list of tabs for one window together
//! with the active index, and is the single source of truth the views render
//! from. Every mutation follows the same pattern: update the list and the
//! active index, consulting the [`OrderController`] where a position has to be
//! chosen, then notify observers.
//!
//! Tabs are either *mini* (pinned, or app contents) or regular. Mini tabs
//! always form a contiguous prefix of the strip; inserts are pushed to the
//! nearest legal position and moves that would break the prefix are ignored.
//!
//! Precondition violations (an index that is not in the strip, closing from
//! an empty strip) are caller bugs and panic. Requests that are merely not
//! allowed by policy (unpinning an app tab, reselecting the active tab) are
//! silently ignored.

mod commands;
mod flags;
mod record;

pub use commands::ContextMenuCommand;
pub use flags::{AddTabFlags, CloseTabFlags, TabChangeType, TabReplaceType};

use std::rc::Rc;

use tab_strip_config::{InsertionPolicy, PageTransition, TabStripConfig};

use crate::contents::{ContentsHandle, same_contents};
use crate::delegate::TabStripModelDelegate;
use crate::observer::{ObserverList, TabStripModelObserver};
use crate::order_controller::{DefaultOrderController, OrderController, StripState};
use record::TabRecord;

/// Ordered collection of tabs for one window.
pub struct TabStripModel {
    /// Performs the work the model cannot do itself
    delegate: Rc<dyn TabStripModelDelegate>,
    /// All tabs, in display order
    tabs: Vec<TabRecord>,
    /// Index of the active tab; `None` only while the strip is empty
    active_index: Option<usize>,
    /// True while `close_all_tabs` is running
    closing_all: bool,
    /// Where foreground tabs are opened relative to the active tab
    insertion_policy: InsertionPolicy,
    /// Placement and reselection policy
    order_controller: Box<dyn OrderController>,
    observers: ObserverList,
}

impl TabStripModel {
    /// Create an empty model with the default order controller.
    pub fn new(delegate: Rc<dyn TabStripModelDelegate>) -> Self {
        Self::with_order_controller(delegate, Box::new(DefaultOrderController::new()))
    }

    /// Create an empty model using the insertion policy and placement table
    /// from `config`.
    pub fn with_config(delegate: Rc<dyn TabStripModelDelegate>, config: &TabStripConfig) -> Self {
        let mut model = Self::with_order_controller(
            delegate,
            Box::new(DefaultOrderController::from_config(config)),
        );
        model.insertion_policy = config.insertion_policy;
        model
    }

    /// Create an empty model with a custom order controller.
    pub fn with_order_controller(
        delegate: Rc<dyn TabStripModelDelegate>,
        order_controller: Box<dyn OrderController>,
    ) -> Self {
        Self {
            delegate,
            tabs: Vec::new(),
            active_index: None,
            closing_all: false,
            insertion_policy: InsertionPolicy::default(),
            order_controller,
            observers: ObserverList::new(),
        }
    }

    pub fn delegate(&self) -> &Rc<dyn TabStripModelDelegate> {
        &self.delegate
    }

    pub fn order_controller(&self) -> &dyn OrderController {
        self.order_controller.as_ref()
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Register `observer`. Registering the same observer twice is a no-op
    /// and returns false.
    pub fn add_observer(&mut self, observer: Rc<dyn TabStripModelObserver>) -> bool {
        self.observers.add(observer)
    }

    /// Unregister `observer`. Returns whether it was registered.
    pub fn remove_observer(&mut self, observer: &Rc<dyn TabStripModelObserver>) -> bool {
        self.observers.remove(observer)
    }

    pub fn has_observer(&self, observer: &Rc<dyn TabStripModelObserver>) -> bool {
        self.observers.contains(observer)
    }

    // ------------------------------------------------------------------
    // State queries
    // ------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Index of the active tab, `None` when the strip is empty.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// True while [`close_all_tabs`](Self::close_all_tabs) is running.
    /// Observers can use it to skip per-tab work during the flurry of
    /// close and select notifications.
    pub fn closing_all(&self) -> bool {
        self.closing_all
    }

    pub fn insertion_policy(&self) -> InsertionPolicy {
        self.insertion_policy
    }

    pub fn set_insertion_policy(&mut self, policy: InsertionPolicy) {
        self.insertion_policy = policy;
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.tabs.len()
    }

    pub fn active_contents(&self) -> Option<&ContentsHandle> {
        self.active_index.map(|index| &self.tabs[index].contents)
    }

    pub fn contents_at(&self, index: usize) -> Option<&ContentsHandle> {
        self.tabs.get(index).map(|record| &record.contents)
    }

    /// Position of `contents` in the strip, by identity.
    pub fn index_of(&self, contents: &ContentsHandle) -> Option<usize> {
        self.tabs
            .iter()
            .position(|record| same_contents(&record.contents, contents))
    }

    pub fn is_tab_pinned(&self, index: usize) -> bool {
        self.record(index).pinned
    }

    /// Pinned or app.
    pub fn is_mini_tab(&self, index: usize) -> bool {
        self.record(index).is_mini()
    }

    pub fn is_app_tab(&self, index: usize) -> bool {
        self.record(index).is_app()
    }

    pub fn is_tab_blocked(&self, index: usize) -> bool {
        self.record(index).blocked
    }

    /// Index of the first regular tab: `count()` if every tab is mini, 0 if
    /// none is.
    pub fn index_of_first_non_mini_tab(&self) -> usize {
        self.tabs
            .iter()
            .position(|record| !record.is_mini())
            .unwrap_or(self.tabs.len())
    }

    /// Clamp a proposed insertion index into the region a tab of the given
    /// kind may occupy: `0..=first_non_mini` for mini tabs,
    /// `first_non_mini..=count` for regular ones.
    pub fn constrain_insertion_index(&self, index: usize, mini_tab: bool) -> usize {
        let first_non_mini = self.index_of_first_non_mini_tab();
        if mini_tab {
            index.min(first_non_mini)
        } else {
            index.max(first_non_mini).min(self.tabs.len())
        }
    }

    /// Whether any tab is still loading.
    pub fn tabs_are_loading(&self) -> bool {
        self.tabs.iter().any(|record| record.contents.is_loading())
    }

    /// Index of the tab that opened the tab at `index`, if it asked to
    /// remember its opener and the opener is still in this strip.
    pub fn opener_index_of(&self, index: usize) -> Option<usize> {
        let opener = self.record(index).opener()?;
        self.index_of(&opener)
    }

    /// Drop every recorded opener relationship.
    pub fn forget_all_openers(&mut self) {
        for record in &mut self.tabs {
            record.set_opener(None);
        }
    }

    /// Called by the host when `contents` is about to navigate. Navigations
    /// that start a new task make the recorded openers meaningless.
    pub fn tab_navigating(&mut self, contents: &ContentsHandle, transition: PageTransition) {
        if transition.starts_new_task() && self.index_of(contents).is_some() {
            log::debug!(
                "Forgetting openers after {} navigation",
                transition.as_str()
            );
            self.forget_all_openers();
        }
    }

    pub(crate) fn strip_state(&self) -> StripState {
        StripState {
            count: self.tabs.len(),
            active_index: self.active_index,
            insertion_policy: self.insertion_policy,
        }
    }

    // ------------------------------------------------------------------
    // Basic API
    // ------------------------------------------------------------------

    /// Add `contents` at the append position. Foreground tabs become active
    /// and remember the previously active tab as their opener.
    pub fn append_tab(&mut self, contents: ContentsHandle, foreground: bool) -> usize {
        let index = self
            .order_controller
            .determine_insertion_index_for_appending(&self.strip_state());
        let flags = if foreground {
            AddTabFlags {
                active: true,
                inherit_group: true,
                ..AddTabFlags::NONE
            }
        } else {
            AddTabFlags::NONE
        };
        self.insert_tab_at(index, contents, flags)
    }

    /// Insert `contents` at `index`.
    ///
    /// The order controller is not consulted here; the index only moves if
    /// using it as-is would put a mini tab after a regular one or vice versa.
    /// App contents are always pinned. The first tab of an empty strip always
    /// becomes active. Returns the index the tab ended up at.
    pub fn insert_tab_at(
        &mut self,
        index: usize,
        contents: ContentsHandle,
        flags: AddTabFlags,
    ) -> usize {
        let pinned = contents.is_app() || flags.pinned;
        let index = self.constrain_insertion_index(index, pinned);
        let old_active = self.active_contents().cloned();

        let mut record = TabRecord::new(Rc::clone(&contents), pinned);
        if flags.inherits_opener() {
            record.set_opener(old_active.as_ref());
        }
        self.tabs.insert(index, record);

        if let Some(active) = self.active_index
            && index <= active
        {
            self.active_index = Some(active + 1);
        }

        log::info!(
            "Inserted tab '{}' at index {} (total: {}, pinned: {})",
            contents.title(),
            index,
            self.tabs.len(),
            pinned
        );

        // The first tab is always selected, so it is reported as foreground.
        let foreground = flags.active || old_active.is_none();
        self.observers
            .notify(|o| o.tab_inserted_at(&contents, index, foreground));

        if foreground {
            self.change_active_from(old_active, index, false);
        }
        index
    }

    /// Close the tab at `index`.
    ///
    /// Returns true if the tab was closed immediately. Returns false if the
    /// delegate refused the close, or has unload listeners to run first; in
    /// the latter case the host closes the tab again once they finished.
    ///
    /// # Panics
    /// If `index` is not in the strip.
    pub fn close_tab_at(&mut self, index: usize, flags: CloseTabFlags) -> bool {
        assert!(!self.tabs.is_empty(), "close_tab_at on an empty tab strip");
        self.assert_contains(index);
        self.internal_close_tabs(&[index], flags)
    }

    /// Close every tab, last to first, recording each in the history.
    ///
    /// [`closing_all`](Self::closing_all) is true for the duration of the
    /// call. Returns true if every tab closed immediately.
    pub fn close_all_tabs(&mut self) -> bool {
        if self.tabs.is_empty() {
            return true;
        }

        log::info!("Closing all {} tabs", self.tabs.len());
        self.closing_all = true;
        let indices: Vec<usize> = (0..self.tabs.len()).rev().collect();
        let closed = self.internal_close_tabs(&indices, CloseTabFlags::CREATE_HISTORICAL_TAB);
        self.closing_all = false;

        if !closed {
            log::info!("Close all left {} tabs open", self.tabs.len());
        }
        closed
    }

    /// Swap the contents at `index` for `new_contents` without a
    /// detach/insert cycle. The old contents are handed back to the caller
    /// and are not destroyed.
    ///
    /// If `new_contents` is an app and the tab was regular, the tab is pinned
    /// and moved to the end of the mini region.
    pub fn replace_tab_at(
        &mut self,
        index: usize,
        new_contents: ContentsHandle,
        replace_type: TabReplaceType,
    ) -> ContentsHandle {
        self.assert_contains(index);
        let was_mini = self.tabs[index].is_mini();
        let first_non_mini = self.index_of_first_non_mini_tab();

        let old_contents =
            std::mem::replace(&mut self.tabs[index].contents, Rc::clone(&new_contents));
        log::debug!(
            "Replaced contents at index {} ({:?})",
            index,
            replace_type
        );
        self.observers
            .notify(|o| o.tab_replaced_at(&old_contents, &new_contents, index, replace_type));

        if !was_mini && new_contents.is_app() {
            self.tabs[index].pinned = true;
            let target = first_non_mini;
            if target != index {
                self.move_tab_impl(index, target, false);
            }
            self.observers
                .notify(|o| o.tab_pinned_state_changed(&new_contents, target));
            self.observers
                .notify(|o| o.tab_mini_state_changed(&new_contents, target));
        }

        old_contents
    }

    /// Remove the tab at `index` without destroying its contents, e.g. to
    /// move it into another strip. Selection moves exactly as for a close.
    pub fn detach_tab_at(&mut self, index: usize) -> ContentsHandle {
        self.remove_tab_at(index)
    }

    /// Make the tab at `index` active. `user_gesture` is whether the user
    /// clicked or used a keyboard command, as opposed to a side effect.
    ///
    /// Selecting the already active tab does nothing.
    pub fn select_tab_at(&mut self, index: usize, user_gesture: bool) {
        self.assert_contains(index);
        let old_active = self.active_contents().cloned();
        self.change_active_from(old_active, index, user_gesture);
    }

    /// Move the tab at `from_index` to `to_index` in place.
    ///
    /// Only a `tab_moved` notification is sent. If `select_after_move` is
    /// false the previously active tab stays active, wherever it ended up.
    /// Moves that would mix mini and regular tabs are ignored. Returns
    /// whether the tab moved.
    pub fn move_tab(&mut self, from_index: usize, to_index: usize, select_after_move: bool) -> bool {
        self.assert_contains(from_index);
        self.assert_contains(to_index);
        if from_index == to_index {
            return false;
        }

        let first_non_mini = self.index_of_first_non_mini_tab();
        if (from_index < first_non_mini && to_index >= first_non_mini)
            || (to_index < first_non_mini && from_index >= first_non_mini)
        {
            log::warn!(
                "Ignoring move from {} to {}: would mix mini and regular tabs",
                from_index,
                to_index
            );
            return false;
        }

        self.move_tab_impl(from_index, to_index, select_after_move);
        true
    }

    /// Notify observers that the tab at `index` changed.
    pub fn update_tab_state_at(&mut self, index: usize, change: TabChangeType) {
        self.assert_contains(index);
        let contents = Rc::clone(&self.tabs[index].contents);
        self.observers
            .notify(|o| o.tab_changed_at(&contents, index, change));
    }

    /// Block or unblock the tab at `index` (e.g. for a tab-modal dialog).
    pub fn set_tab_blocked(&mut self, index: usize, blocked: bool) {
        self.assert_contains(index);
        if self.tabs[index].blocked == blocked {
            return;
        }
        self.tabs[index].blocked = blocked;
        let contents = Rc::clone(&self.tabs[index].contents);
        log::debug!("Tab {} blocked: {}", index, blocked);
        self.observers
            .notify(|o| o.tab_blocked_state_changed(&contents, index));
    }

    /// Pin or unpin the tab at `index`.
    ///
    /// A regular tab that changes state is moved to the boundary of the
    /// region it now belongs to: the end of the mini prefix when pinned, the
    /// start of the regular tabs when unpinned. Observers then get
    /// `tab_pinned_state_changed` followed by `tab_mini_state_changed`. App
    /// tabs cannot be unpinned.
    pub fn set_tab_pinned(&mut self, index: usize, pinned: bool) {
        self.assert_contains(index);
        if self.tabs[index].pinned == pinned {
            return;
        }

        // App tabs are stored pinned, so only an unpin request reaches here.
        if self.tabs[index].is_app() {
            log::warn!("Ignoring unpin of app tab at index {}", index);
            return;
        }

        let first_non_mini = self.index_of_first_non_mini_tab();
        self.tabs[index].pinned = pinned;
        let target = if pinned {
            first_non_mini
        } else {
            first_non_mini - 1
        };
        log::debug!(
            "Tab {} pinned: {} (moving to {})",
            index,
            pinned,
            target
        );
        if target != index {
            self.move_tab_impl(index, target, false);
        }

        let contents = Rc::clone(&self.tabs[target].contents);
        self.observers
            .notify(|o| o.tab_pinned_state_changed(&contents, target));
        self.observers
            .notify(|o| o.tab_mini_state_changed(&contents, target));
    }

    /// Called by the host when `contents` went away outside of a close
    /// call (for instance after its unload handlers finished). The matching
    /// tab, if any, is detached.
    pub fn contents_destroyed(&mut self, contents: &ContentsHandle) {
        if let Some(index) = self.index_of(contents) {
            log::debug!("Contents at index {} destroyed externally", index);
            self.remove_tab_at(index);
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn record(&self, index: usize) -> &TabRecord {
        self.assert_contains(index);
        &self.tabs[index]
    }

    fn assert_contains(&self, index: usize) {
        assert!(
            self.contains_index(index),
            "tab index {} out of range for {} tabs",
            index,
            self.tabs.len()
        );
    }

    /// Close the tabs at `indices`, which must be sorted descending so that
    /// closing one never shifts the ones still to come.
    pub(crate) fn internal_close_tabs(&mut self, indices: &[usize], flags: CloseTabFlags) -> bool {
        debug_assert!(indices.windows(2).all(|w| w[0] > w[1]));

        let mut all_closed = true;
        for &index in indices {
            self.assert_contains(index);
            if !self.delegate.can_close_at(index) {
                log::debug!("Delegate refused to close tab {}", index);
                all_closed = false;
                continue;
            }

            let contents = Rc::clone(&self.tabs[index].contents);
            if self.delegate.run_unload_listener_before_closing(&contents) {
                log::debug!("Close of tab {} deferred for unload listeners", index);
                all_closed = false;
                continue;
            }

            self.internal_close_tab(index, flags);
        }
        all_closed
    }

    fn internal_close_tab(&mut self, index: usize, flags: CloseTabFlags) {
        let contents = Rc::clone(&self.tabs[index].contents);
        log::info!("Closing tab '{}' (index {})", contents.title(), index);

        self.observers.notify(|o| o.tab_closing_at(&contents, index));

        if flags.user_gesture && !contents.closed_by_user_gesture() {
            contents.set_closed_by_user_gesture(true);
        }
        if flags.create_historical_tab {
            self.delegate.create_historical_tab(&contents);
        }

        contents.destroy();
        self.remove_tab_at(index);
    }

    /// Drop the record at `index`, notify, and hand the active tab to
    /// whichever tab the order controller picks.
    fn remove_tab_at(&mut self, index: usize) -> ContentsHandle {
        assert!(!self.tabs.is_empty(), "detach from an empty tab strip");
        self.assert_contains(index);

        let next_active = self
            .order_controller
            .determine_new_selected_index(&self.strip_state(), index);
        let removed = self.tabs.remove(index).contents;
        log::info!(
            "Removed tab '{}' (index {}, remaining: {})",
            removed.title(),
            index,
            self.tabs.len()
        );

        self.observers.notify(|o| o.tab_detached_at(&removed, index));

        if self.tabs.is_empty() {
            self.active_index = None;
            log::info!("Tab strip is now empty");
            self.observers.notify(|o| o.tab_strip_empty());
        } else if self.active_index == Some(index) {
            let next = next_active.unwrap_or(index.min(self.tabs.len() - 1));
            self.change_active_from(Some(Rc::clone(&removed)), next, false);
        } else {
            self.active_index = next_active;
        }

        removed
    }

    /// Deselect `old_contents` (if any) and make the tab at `to_index`
    /// active. `active_index` must still point at the old tab's slot when
    /// this runs.
    fn change_active_from(
        &mut self,
        old_contents: Option<ContentsHandle>,
        to_index: usize,
        user_gesture: bool,
    ) {
        self.assert_contains(to_index);
        let new_contents = Rc::clone(&self.tabs[to_index].contents);
        if let Some(old) = &old_contents
            && same_contents(old, &new_contents)
        {
            return;
        }

        if let (Some(old), Some(old_index)) = (&old_contents, self.active_index) {
            self.observers
                .notify(|o| o.tab_deselected_at(old, old_index));
        }

        self.active_index = Some(to_index);
        log::debug!(
            "Switched to tab {} (user gesture: {})",
            to_index,
            user_gesture
        );
        self.observers.notify(|o| {
            o.tab_selected_at(old_contents.as_ref(), &new_contents, to_index, user_gesture)
        });
    }

    /// Move without the mini/regular checks done by `move_tab`.
    fn move_tab_impl(&mut self, from_index: usize, to_index: usize, select_after_move: bool) {
        let record = self.tabs.remove(from_index);
        let contents = Rc::clone(&record.contents);
        self.tabs.insert(to_index, record);

        // Keep the same tab active even though positions shifted.
        if let Some(active) = self.active_index {
            let active = if active == from_index {
                to_index
            } else if from_index < active && to_index >= active {
                active - 1
            } else if from_index > active && to_index <= active {
                active + 1
            } else {
                active
            };
            self.active_index = Some(active);
        }

        log::debug!("Moved tab from index {} to {}", from_index, to_index);
        self.observers
            .notify(|o| o.tab_moved(&contents, from_index, to_index));

        if select_after_move {
            self.select_tab_at(to_index, false);
        }
    }
}

impl Drop for TabStripModel {
    fn drop(&mut self) {
        self.observers.notify(|o| o.tab_strip_model_deleted());
    }
}
