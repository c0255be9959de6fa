//! Command-level operations built on top of the basic model API: the
//! add/close/select helpers bound to browser commands, and the tab context
//! menu.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tab_strip_config::PageTransition;

use super::{AddTabFlags, CloseTabFlags, TabStripModel};
use crate::contents::ContentsHandle;
use crate::error::TabStripError;

/// Commands offered by the tab context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMenuCommand {
    NewTab,
    Reload,
    Duplicate,
    CloseTab,
    CloseOtherTabs,
    CloseTabsToRight,
    RestoreTab,
    TogglePinned,
}

impl ContextMenuCommand {
    /// Every command, in menu order.
    pub fn all() -> &'static [ContextMenuCommand] {
        &[
            ContextMenuCommand::NewTab,
            ContextMenuCommand::Reload,
            ContextMenuCommand::Duplicate,
            ContextMenuCommand::CloseTab,
            ContextMenuCommand::CloseOtherTabs,
            ContextMenuCommand::CloseTabsToRight,
            ContextMenuCommand::RestoreTab,
            ContextMenuCommand::TogglePinned,
        ]
    }

    /// Action name used in key bindings and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextMenuCommand::NewTab => "new_tab",
            ContextMenuCommand::Reload => "reload",
            ContextMenuCommand::Duplicate => "duplicate",
            ContextMenuCommand::CloseTab => "close_tab",
            ContextMenuCommand::CloseOtherTabs => "close_other_tabs",
            ContextMenuCommand::CloseTabsToRight => "close_tabs_to_right",
            ContextMenuCommand::RestoreTab => "restore_tab",
            ContextMenuCommand::TogglePinned => "toggle_pinned",
        }
    }
}

impl fmt::Display for ContextMenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextMenuCommand {
    type Err = TabStripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContextMenuCommand::all()
            .iter()
            .copied()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| TabStripError::UnknownCommand(s.to_string()))
    }
}

impl TabStripModel {
    /// Add `contents` the way a browser command would.
    ///
    /// Unless `flags.force_index` is set, the order controller picks the
    /// position and `index` is ignored. With `force_index`, an absent or
    /// out-of-range index means "append". Link opens and typed opens at the
    /// end of the strip remember the active tab as their opener. Returns the
    /// index the tab ended up at.
    pub fn add_tab(
        &mut self,
        contents: ContentsHandle,
        index: Option<usize>,
        transition: PageTransition,
        flags: AddTabFlags,
    ) -> usize {
        let mut flags = flags;
        let strip = self.strip_state();

        let index = if flags.force_index {
            match index {
                Some(index) if index <= strip.count => index,
                _ => self
                    .order_controller
                    .determine_insertion_index_for_appending(&strip),
            }
        } else {
            if transition == PageTransition::Link {
                flags.inherit_group = true;
            }
            self.order_controller
                .determine_insertion_index(&strip, &contents, transition, flags.active)
        };

        if transition == PageTransition::Typed && index == strip.count {
            flags.inherit_group = true;
        }

        log::debug!(
            "Adding tab for {} transition at index {}",
            transition.as_str(),
            index
        );
        self.insert_tab_at(index, contents, flags.with(AddTabFlags::FORCE_INDEX))
    }

    /// Ask the delegate for blank contents and add them as a typed open.
    pub fn add_blank_tab(&mut self, foreground: bool) -> usize {
        let contents = self.delegate.add_blank_tab(foreground);
        let flags = if foreground {
            AddTabFlags::ACTIVE
        } else {
            AddTabFlags::NONE
        };
        self.add_tab(contents, None, PageTransition::Typed, flags)
    }

    /// Close the active tab as if the user asked for it. Returns false if
    /// there is no active tab or the close did not happen immediately.
    pub fn close_active_tab(&mut self) -> bool {
        match self.active_index {
            Some(index) => self.close_tab_at(
                index,
                CloseTabFlags::USER_GESTURE.with(CloseTabFlags::CREATE_HISTORICAL_TAB),
            ),
            None => false,
        }
    }

    /// Activate the tab to the right of the active one, wrapping around.
    pub fn select_next_tab(&mut self) {
        self.select_relative_tab(true);
    }

    /// Activate the tab to the left of the active one, wrapping around.
    pub fn select_previous_tab(&mut self) {
        self.select_relative_tab(false);
    }

    pub fn select_last_tab(&mut self) {
        if let Some(last) = self.tabs.len().checked_sub(1) {
            self.select_tab_at(last, true);
        }
    }

    /// Move the active tab one slot to the right. Returns whether it moved.
    pub fn move_tab_next(&mut self) -> bool {
        let Some(active) = self.active_index else {
            return false;
        };
        let target = (active + 1).min(self.tabs.len() - 1);
        self.move_tab(active, target, true)
    }

    /// Move the active tab one slot to the left. Returns whether it moved.
    pub fn move_tab_previous(&mut self) -> bool {
        let Some(active) = self.active_index else {
            return false;
        };
        self.move_tab(active, active.saturating_sub(1), true)
    }

    fn select_relative_tab(&mut self, next: bool) {
        let (Some(active), count) = (self.active_index, self.tabs.len()) else {
            return;
        };
        let index = if next {
            (active + 1) % count
        } else {
            (active + count - 1) % count
        };
        self.select_tab_at(index, true);
    }

    // ------------------------------------------------------------------
    // Context menu
    // ------------------------------------------------------------------

    pub fn is_context_menu_command_enabled(
        &self,
        context_index: usize,
        command: ContextMenuCommand,
    ) -> bool {
        self.assert_contains(context_index);
        match command {
            ContextMenuCommand::NewTab | ContextMenuCommand::CloseTab => {
                self.delegate.can_close_any()
            }
            ContextMenuCommand::Reload => self.tabs[context_index].contents.can_reload(),
            ContextMenuCommand::Duplicate => self.delegate.can_duplicate_at(context_index),
            ContextMenuCommand::CloseOtherTabs => {
                let first_non_mini = self.index_of_first_non_mini_tab();
                let non_mini = self.tabs.len() - first_non_mini;
                non_mini > 1 || (non_mini == 1 && context_index != first_non_mini)
            }
            ContextMenuCommand::CloseTabsToRight => {
                self.tabs.len() != self.index_of_first_non_mini_tab()
                    && context_index < self.tabs.len() - 1
            }
            ContextMenuCommand::RestoreTab => self.delegate.can_restore_tab(),
            ContextMenuCommand::TogglePinned => !self.tabs[context_index].is_app(),
        }
    }

    pub fn is_context_menu_command_checked(
        &self,
        context_index: usize,
        command: ContextMenuCommand,
    ) -> bool {
        self.assert_contains(context_index);
        match command {
            ContextMenuCommand::TogglePinned => self.tabs[context_index].pinned,
            _ => false,
        }
    }

    /// Run `command` against the tab at `context_index`. Disabled commands
    /// are ignored.
    pub fn execute_context_menu_command(
        &mut self,
        context_index: usize,
        command: ContextMenuCommand,
    ) {
        if !self.is_context_menu_command_enabled(context_index, command) {
            log::warn!(
                "Ignoring disabled command {} on tab {}",
                command,
                context_index
            );
            return;
        }
        log::info!("Executing {} on tab {}", command, context_index);

        match command {
            ContextMenuCommand::NewTab => {
                let contents = self.delegate.add_blank_tab(true);
                self.add_tab(
                    contents,
                    Some(context_index + 1),
                    PageTransition::Typed,
                    AddTabFlags::ACTIVE.with(AddTabFlags::FORCE_INDEX),
                );
            }
            ContextMenuCommand::Reload => {
                self.tabs[context_index].contents.reload();
            }
            ContextMenuCommand::Duplicate => {
                self.delegate.duplicate_at(context_index);
            }
            ContextMenuCommand::CloseTab => {
                self.close_tab_at(
                    context_index,
                    CloseTabFlags::USER_GESTURE.with(CloseTabFlags::CREATE_HISTORICAL_TAB),
                );
            }
            ContextMenuCommand::CloseOtherTabs | ContextMenuCommand::CloseTabsToRight => {
                let indices = self.indices_closed_by_command(context_index, command);
                self.internal_close_tabs(&indices, CloseTabFlags::CREATE_HISTORICAL_TAB);
            }
            ContextMenuCommand::RestoreTab => {
                self.delegate.restore_tab();
            }
            ContextMenuCommand::TogglePinned => {
                self.select_tab_at(context_index, true);
                let pinned = self.tabs[context_index].pinned;
                self.set_tab_pinned(context_index, !pinned);
            }
        }
    }

    /// Indices `command` would close if run against `context_index`,
    /// highest first.
    pub fn indices_closed_by_command(
        &self,
        context_index: usize,
        command: ContextMenuCommand,
    ) -> Vec<usize> {
        self.assert_contains(context_index);
        match command {
            ContextMenuCommand::CloseTab => vec![context_index],
            ContextMenuCommand::CloseTabsToRight => {
                let start = (context_index + 1).max(self.index_of_first_non_mini_tab());
                (start..self.tabs.len()).rev().collect()
            }
            ContextMenuCommand::CloseOtherTabs => (self.index_of_first_non_mini_tab()
                ..self.tabs.len())
                .rev()
                .filter(|&index| index != context_index)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_names() {
        for command in ContextMenuCommand::all() {
            assert_eq!(command.as_str().parse::<ContextMenuCommand>().ok(), Some(*command));
        }
    }

    #[test]
    fn unknown_action_is_an_error() {
        let err = "close_everything".parse::<ContextMenuCommand>().unwrap_err();
        assert!(matches!(err, TabStripError::UnknownCommand(ref name) if name == "close_everything"));
        assert_eq!(err.to_string(), "unknown context menu command: close_everything");
    }

    #[test]
    fn serde_uses_action_names() {
        let json = serde_json::to_string(&ContextMenuCommand::CloseTabsToRight).unwrap();
        assert_eq!(json, "\"close_tabs_to_right\"");
    }
}
