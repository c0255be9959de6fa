//! Shared integration test helpers for tab-strip.
//!
//! Fake contents and a scripted delegate that record what the model asked of
//! them, plus factories for models pre-populated with tabs.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{model_with_tabs, TestContents};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use tab_strip::{
    ContentsHandle, EventRecorder, TabContents, TabStripModel, TabStripModelDelegate,
    TabStripModelObserver,
};

// ---------------------------------------------------------------------------
// Contents
// ---------------------------------------------------------------------------

/// Contents that count what the model did to them.
#[derive(Default)]
pub struct TestContents {
    pub title: String,
    pub app: bool,
    pub destroyed: Cell<usize>,
    pub closed_by_user: Cell<bool>,
    pub loading: Cell<bool>,
    pub reloadable: Cell<bool>,
    pub reloads: Cell<usize>,
}

impl TestContents {
    pub fn page(title: &str) -> Rc<Self> {
        Rc::new(Self {
            title: title.to_string(),
            reloadable: Cell::new(true),
            ..Self::default()
        })
    }

    pub fn app(title: &str) -> Rc<Self> {
        Rc::new(Self {
            title: title.to_string(),
            app: true,
            reloadable: Cell::new(true),
            ..Self::default()
        })
    }
}

impl TabContents for TestContents {
    fn is_app(&self) -> bool {
        self.app
    }

    fn destroy(&self) {
        self.destroyed.set(self.destroyed.get() + 1);
    }

    fn set_closed_by_user_gesture(&self, closed_by_user: bool) {
        self.closed_by_user.set(closed_by_user);
    }

    fn closed_by_user_gesture(&self) -> bool {
        self.closed_by_user.get()
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn can_reload(&self) -> bool {
        self.reloadable.get()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn title(&self) -> String {
        self.title.clone()
    }
}

/// Upcast a concrete test contents to the handle type the model takes.
pub fn handle(contents: &Rc<TestContents>) -> ContentsHandle {
    contents.clone()
}

// ---------------------------------------------------------------------------
// Delegate
// ---------------------------------------------------------------------------

/// Delegate whose answers are set by the test and which logs every call.
#[derive(Default)]
pub struct TestDelegate {
    /// Indices `can_close_at` refuses
    pub refuse_close: RefCell<HashSet<usize>>,
    /// Titles whose close is deferred for unload listeners
    pub pending_unload: RefCell<HashSet<String>>,
    pub can_close_any: Cell<bool>,
    pub can_duplicate: Cell<bool>,
    pub can_restore: Cell<bool>,
    /// Titles recorded through `create_historical_tab`
    pub historical: RefCell<Vec<String>>,
    /// Blank contents handed out by `add_blank_tab`
    pub blanks: RefCell<Vec<Rc<TestContents>>>,
    /// Every call, as "method" or "method:arg"
    pub calls: RefCell<Vec<String>>,
}

impl TestDelegate {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            can_close_any: Cell::new(true),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn call(&self, name: String) {
        self.calls.borrow_mut().push(name);
    }
}

impl TabStripModelDelegate for TestDelegate {
    fn add_blank_tab(&self, foreground: bool) -> ContentsHandle {
        let blank = TestContents::page(&format!("blank {}", self.blanks.borrow().len()));
        self.blanks.borrow_mut().push(Rc::clone(&blank));
        self.call(format!("add_blank_tab:{}", foreground));
        blank
    }

    fn can_duplicate_at(&self, _index: usize) -> bool {
        self.can_duplicate.get()
    }

    fn duplicate_at(&self, index: usize) {
        self.call(format!("duplicate_at:{}", index));
    }

    fn create_historical_tab(&self, contents: &ContentsHandle) {
        self.historical.borrow_mut().push(contents.title());
    }

    fn run_unload_listener_before_closing(&self, contents: &ContentsHandle) -> bool {
        self.pending_unload.borrow().contains(&contents.title())
    }

    fn can_restore_tab(&self) -> bool {
        self.can_restore.get()
    }

    fn restore_tab(&self) {
        self.call("restore_tab".to_string());
    }

    fn can_close_at(&self, index: usize) -> bool {
        !self.refuse_close.borrow().contains(&index)
    }

    fn can_close_any(&self) -> bool {
        self.can_close_any.get()
    }
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// A model with one background tab per title. The first tab is active.
pub fn model_with_tabs(
    titles: &[&str],
) -> (TabStripModel, Rc<TestDelegate>, Vec<Rc<TestContents>>) {
    let delegate = TestDelegate::new();
    let mut model = TabStripModel::new(delegate.clone());
    let tabs: Vec<Rc<TestContents>> = titles.iter().map(|t| TestContents::page(t)).collect();
    for tab in &tabs {
        model.append_tab(handle(tab), false);
    }
    (model, delegate, tabs)
}

/// Register a fresh recorder on `model`.
pub fn attach_recorder(model: &mut TabStripModel) -> Rc<EventRecorder> {
    let recorder = Rc::new(EventRecorder::new(None));
    let observer: Rc<dyn TabStripModelObserver> = recorder.clone();
    model.add_observer(observer);
    recorder
}

/// Titles of the tabs in display order.
pub fn titles(model: &TabStripModel) -> Vec<String> {
    (0..model.count())
        .filter_map(|index| model.contents_at(index))
        .map(|contents| contents.title())
        .collect()
}

/// Whether the mini tabs form a prefix of the strip.
pub fn mini_prefix_holds(model: &TabStripModel) -> bool {
    let first_non_mini = model.index_of_first_non_mini_tab();
    (0..model.count()).all(|index| model.is_mini_tab(index) == (index < first_non_mini))
}
