//! Pluggable placement and reselection policy.
//!
//! The order controller decides where newly opened tabs go and which tab
//! becomes active after one is removed. It holds no per-strip state: every
//! decision is a pure function of the [`StripState`] snapshot it is handed,
//! so it is safe to consult at any point during a mutation.

use tab_strip_config::{InsertionPolicy, PageTransition, TabStripConfig, TransitionPlacement};

use crate::contents::ContentsHandle;

/// The slice of model state an order controller decides from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripState {
    /// Number of tabs in the strip
    pub count: usize,
    /// Index of the active tab, `None` when there is none
    pub active_index: Option<usize>,
    /// Where foreground opens go relative to the active tab
    pub insertion_policy: InsertionPolicy,
}

/// Placement and reselection policy consulted by the model.
pub trait OrderController {
    /// Index at which `contents`, opened with `transition`, should be
    /// inserted. The result is in `0..=strip.count`.
    fn determine_insertion_index(
        &self,
        strip: &StripState,
        contents: &ContentsHandle,
        transition: PageTransition,
        foreground: bool,
    ) -> usize;

    /// Index at which appended tabs go.
    fn determine_insertion_index_for_appending(&self, strip: &StripState) -> usize {
        strip.count
    }

    /// Index of the tab that should be active once the tab at
    /// `removed_index` is gone, expressed in post-removal positions.
    /// `None` when nothing is left to select.
    fn determine_new_selected_index(&self, strip: &StripState, removed_index: usize)
    -> Option<usize>;
}

/// Default policy: a per-transition placement table plus the insertion
/// policy for foreground opens.
#[derive(Debug, Clone, Default)]
pub struct DefaultOrderController {
    config: TabStripConfig,
}

impl DefaultOrderController {
    /// Controller using [`PageTransition::default_placement`] for every
    /// transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller honouring the placement overrides in `config`.
    pub fn from_config(config: &TabStripConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Override the placement used for `transition`.
    pub fn set_placement(&mut self, transition: PageTransition, placement: TransitionPlacement) {
        self.config
            .transition_placement
            .insert(transition, placement);
    }

    pub fn placement_for(&self, transition: PageTransition) -> TransitionPlacement {
        self.config.placement_for(transition)
    }
}

impl OrderController for DefaultOrderController {
    fn determine_insertion_index(
        &self,
        strip: &StripState,
        _contents: &ContentsHandle,
        transition: PageTransition,
        foreground: bool,
    ) -> usize {
        let append = self.determine_insertion_index_for_appending(strip);
        let Some(active) = strip.active_index else {
            return append;
        };

        match self.placement_for(transition) {
            TransitionPlacement::Adjacent if foreground => match strip.insertion_policy {
                InsertionPolicy::InsertAfterActive => active + 1,
                InsertionPolicy::InsertBeforeActive => active,
            },
            TransitionPlacement::Adjacent | TransitionPlacement::Append => append,
        }
    }

    fn determine_new_selected_index(
        &self,
        strip: &StripState,
        removed_index: usize,
    ) -> Option<usize> {
        assert!(
            removed_index < strip.count,
            "removed index {} out of range for {} tabs",
            removed_index,
            strip.count
        );
        let remaining = strip.count - 1;

        match strip.active_index {
            Some(active) if active == removed_index => {
                if remaining == 0 {
                    None
                } else if removed_index < remaining {
                    // The right-hand neighbour slides into the removed slot.
                    Some(removed_index)
                } else {
                    Some(remaining - 1)
                }
            }
            Some(active) if removed_index < active => Some(active - 1),
            Some(active) => Some(active),
            None if remaining == 0 => None,
            None => Some(removed_index.min(remaining - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::TabContents;
    use std::rc::Rc;

    struct Page;

    impl TabContents for Page {
        fn is_app(&self) -> bool {
            false
        }
    }

    fn page() -> ContentsHandle {
        Rc::new(Page)
    }

    fn strip(count: usize, active_index: Option<usize>) -> StripState {
        StripState {
            count,
            active_index,
            insertion_policy: InsertionPolicy::InsertAfterActive,
        }
    }

    #[test]
    fn foreground_link_opens_after_active() {
        let controller = DefaultOrderController::new();
        let index = controller.determine_insertion_index(
            &strip(4, Some(1)),
            &page(),
            PageTransition::Link,
            true,
        );
        assert_eq!(index, 2);
    }

    #[test]
    fn foreground_link_opens_before_active_with_before_policy() {
        let controller = DefaultOrderController::new();
        let state = StripState {
            insertion_policy: InsertionPolicy::InsertBeforeActive,
            ..strip(4, Some(1))
        };
        let index =
            controller.determine_insertion_index(&state, &page(), PageTransition::Link, true);
        assert_eq!(index, 1);
    }

    #[test]
    fn background_link_appends() {
        let controller = DefaultOrderController::new();
        let index = controller.determine_insertion_index(
            &strip(4, Some(1)),
            &page(),
            PageTransition::Link,
            false,
        );
        assert_eq!(index, 4);
    }

    #[test]
    fn typed_always_appends() {
        let controller = DefaultOrderController::new();
        let index = controller.determine_insertion_index(
            &strip(4, Some(0)),
            &page(),
            PageTransition::Typed,
            true,
        );
        assert_eq!(index, 4);
    }

    #[test]
    fn empty_strip_inserts_at_zero() {
        let controller = DefaultOrderController::new();
        let index =
            controller.determine_insertion_index(&strip(0, None), &page(), PageTransition::Link, true);
        assert_eq!(index, 0);
    }

    #[test]
    fn override_changes_placement() {
        let mut controller = DefaultOrderController::new();
        controller.set_placement(PageTransition::Typed, TransitionPlacement::Adjacent);
        let index = controller.determine_insertion_index(
            &strip(4, Some(0)),
            &page(),
            PageTransition::Typed,
            true,
        );
        assert_eq!(index, 1);
    }

    #[test]
    fn placement_matches_config_table() {
        let mut config = TabStripConfig::default();
        config
            .transition_placement
            .insert(PageTransition::Typed, TransitionPlacement::Adjacent);
        config
            .transition_placement
            .insert(PageTransition::Link, TransitionPlacement::Append);
        let controller = DefaultOrderController::from_config(&config);

        for (transition, placement) in config.placement_table() {
            assert_eq!(
                controller.placement_for(transition),
                placement,
                "{:?} placement differs from config",
                transition
            );
        }
    }

    #[test]
    fn closing_active_prefers_right_neighbour() {
        let controller = DefaultOrderController::new();
        assert_eq!(
            controller.determine_new_selected_index(&strip(3, Some(1)), 1),
            Some(1)
        );
    }

    #[test]
    fn closing_active_last_selects_new_last() {
        let controller = DefaultOrderController::new();
        assert_eq!(
            controller.determine_new_selected_index(&strip(3, Some(2)), 2),
            Some(1)
        );
    }

    #[test]
    fn closing_only_tab_selects_nothing() {
        let controller = DefaultOrderController::new();
        assert_eq!(
            controller.determine_new_selected_index(&strip(1, Some(0)), 0),
            None
        );
    }

    #[test]
    fn closing_before_active_shifts_down() {
        let controller = DefaultOrderController::new();
        assert_eq!(
            controller.determine_new_selected_index(&strip(4, Some(2)), 0),
            Some(1)
        );
    }

    #[test]
    fn closing_after_active_keeps_index() {
        let controller = DefaultOrderController::new();
        assert_eq!(
            controller.determine_new_selected_index(&strip(4, Some(1)), 3),
            Some(1)
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn closing_out_of_range_panics() {
        let controller = DefaultOrderController::new();
        controller.determine_new_selected_index(&strip(2, Some(0)), 2);
    }
}
