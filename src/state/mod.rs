//! Application state management
//!
//! The page owns exactly two pieces of state: the shared [`FilterState`] every chart reads,
//! and the [`ViewState`] that decides what is visible. Neither knows about the charts.

mod filters;
mod view;

pub use filters::{ColorMode, Decade, FilterEdit, FilterState, GenreFilter};
pub use view::{MapMode, ViewState, ViewTab};

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Filters shared by every chart; only ever replaced whole
    pub filters: FilterState,

    /// Tab, theme and map state
    pub view: ViewState,
}

impl AppState {
    /// Start from the given filters
    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            filters,
            view: ViewState::default(),
        }
    }

    /// Swap in the result of one filter control; returns whether the state changed
    pub fn apply(&mut self, edit: FilterEdit) -> bool {
        let next = self.filters.apply(edit);
        self.replace_filters(next)
    }

    /// Install a whole new filter state; returns whether it differs from the current one
    pub fn replace_filters(&mut self, next: FilterState) -> bool {
        if next == self.filters {
            return false;
        }
        tracing::debug!(?next, "filters replaced");
        self.filters = next;
        true
    }

    /// Switch view group without touching the filters
    pub fn switch_tab(&mut self, tab: ViewTab) -> bool {
        let changed = self.view.select_tab(tab);
        if changed {
            tracing::info!(tab = tab.label(), "view switched");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_tabs_preserves_filters() {
        let mut state = AppState::default();
        state.apply(FilterEdit::DecadeIndex(6));
        assert_eq!(state.filters.decade.year(), 1990);

        assert!(state.switch_tab(ViewTab::GlobalMap));
        assert!(state.switch_tab(ViewTab::Dashboard));
        assert_eq!(state.filters.decade.year(), 1990);
    }

    #[test]
    fn test_apply_reports_no_op_edits() {
        let mut state = AppState::default();
        assert!(!state.apply(FilterEdit::DecadeIndex(9)));
        assert!(state.apply(FilterEdit::PopularityMinimum(30)));
        assert_eq!(state.filters.popularity_minimum, 30);
    }
}
