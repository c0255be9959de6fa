use std::rc::{Rc, Weak};

use crate::contents::{ContentsHandle, TabContents};

/// Per-tab state held by the model.
pub(crate) struct TabRecord {
    pub(crate) contents: ContentsHandle,
    pub(crate) pinned: bool,
    pub(crate) blocked: bool,
    /// The tab that was active when this one was opened, if it asked to
    /// remember it. Weak so a closed opener simply stops resolving.
    pub(crate) opener: Option<Weak<dyn TabContents>>,
}

impl TabRecord {
    pub(crate) fn new(contents: ContentsHandle, pinned: bool) -> Self {
        Self {
            contents,
            pinned,
            blocked: false,
            opener: None,
        }
    }

    pub(crate) fn is_app(&self) -> bool {
        self.contents.is_app()
    }

    /// Pinned or app.
    pub(crate) fn is_mini(&self) -> bool {
        self.pinned || self.is_app()
    }

    pub(crate) fn opener(&self) -> Option<ContentsHandle> {
        self.opener.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_opener(&mut self, opener: Option<&ContentsHandle>) {
        self.opener = opener.map(Rc::downgrade);
    }
}
