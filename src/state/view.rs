//! View and visualization state

use serde::{Deserialize, Serialize};

/// Top-level view group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewTab {
    #[default]
    Dashboard,
    GlobalMap,
}

impl ViewTab {
    pub const ALL: [ViewTab; 2] = [ViewTab::Dashboard, ViewTab::GlobalMap];

    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Dashboard => "Dashboard",
            ViewTab::GlobalMap => "Global Map",
        }
    }
}

/// Metric driving the region grid colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    #[default]
    Genre,
    Popularity,
    Energy,
    Danceability,
}

impl MapMode {
    pub const ALL: [MapMode; 4] = [
        MapMode::Genre,
        MapMode::Popularity,
        MapMode::Energy,
        MapMode::Danceability,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MapMode::Genre => "Genre Dominance",
            MapMode::Popularity => "Popularity",
            MapMode::Energy => "Energy Level",
            MapMode::Danceability => "Danceability",
        }
    }
}

/// View state: everything the page shows that is not a filter
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Visible view group
    pub tab: ViewTab,

    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Region grid colouring
    pub map_mode: MapMode,

    /// Country whose detail panel is open
    pub selected_region: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: ViewTab::default(),
            dark_mode: true,
            map_mode: MapMode::default(),
            selected_region: None,
        }
    }
}

impl ViewState {
    /// Switch the visible group; returns whether anything changed
    pub fn select_tab(&mut self, tab: ViewTab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    /// Clicking the selected country closes its panel, any other opens it
    pub fn toggle_region(&mut self, country: &str) {
        if self.selected_region.as_deref() == Some(country) {
            self.selected_region = None;
        } else {
            self.selected_region = Some(country.to_string());
        }
    }

    /// Clear all selection state
    pub fn clear_selection(&mut self) {
        self.selected_region = None;
    }

    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_selection_toggles() {
        let mut view = ViewState::default();
        view.toggle_region("Japan");
        assert_eq!(view.selected_region.as_deref(), Some("Japan"));
        view.toggle_region("Brazil");
        assert_eq!(view.selected_region.as_deref(), Some("Brazil"));
        view.toggle_region("Brazil");
        assert_eq!(view.selected_region, None);
    }

    #[test]
    fn test_select_tab_reports_change() {
        let mut view = ViewState::default();
        assert!(!view.select_tab(ViewTab::Dashboard));
        assert!(view.select_tab(ViewTab::GlobalMap));
        assert_eq!(view.tab, ViewTab::GlobalMap);
    }
}
