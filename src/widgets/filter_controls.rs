//! Filter panel widget

use crate::constants::layout::STANDARD_PADDING;
use crate::state::{ColorMode, Decade, FilterEdit, FilterState, GenreFilter};
use egui::{ComboBox, Slider, TextEdit, Ui};

/// Controls for every [`FilterState`] field
///
/// The widget never mutates the state it is given: each control that changed yields one
/// [`FilterEdit`], and [`FilterControls::show`] hands back the replacement state.
pub struct FilterControls<'a> {
    filters: &'a FilterState,
}

impl<'a> FilterControls<'a> {
    /// Create a new filter controls widget
    pub fn new(filters: &'a FilterState) -> Self {
        Self { filters }
    }

    /// Show the filter controls; returns the replacement state if a control changed
    pub fn show(self, ui: &mut Ui) -> Option<FilterState> {
        let edit = ui
            .vertical(|ui| {
                let mut edits = Vec::new();

                ui.strong("Decade");
                let mut index = self.filters.decade.index();
                let slider = Slider::new(&mut index, 0..=Decade::ALL.len() - 1)
                    .show_value(false)
                    .text(self.filters.decade.label());
                if ui.add(slider).changed() {
                    edits.push(FilterEdit::DecadeIndex(index));
                }
                ui.add_space(STANDARD_PADDING);

                ui.strong("Genre");
                let mut genre = self.filters.genre;
                ComboBox::from_id_salt("genre_filter")
                    .selected_text(genre.label())
                    .show_ui(ui, |ui| {
                        for option in GenreFilter::OPTIONS {
                            ui.selectable_value(&mut genre, option, option.label());
                        }
                    });
                if genre != self.filters.genre {
                    edits.push(FilterEdit::Genre(genre));
                }
                ui.add_space(STANDARD_PADDING);

                ui.strong("Color by");
                let mut mode = self.filters.color_mode;
                ComboBox::from_id_salt("color_mode")
                    .selected_text(mode.label())
                    .show_ui(ui, |ui| {
                        for option in ColorMode::ALL {
                            ui.selectable_value(&mut mode, option, option.label());
                        }
                    });
                if mode != self.filters.color_mode {
                    edits.push(FilterEdit::ColorMode(mode));
                }
                ui.add_space(STANDARD_PADDING);

                ui.strong("Artist");
                let mut query = self.filters.artist_query.clone();
                let search = TextEdit::singleline(&mut query).hint_text("Search artists...");
                if ui.add(search).changed() {
                    edits.push(FilterEdit::ArtistQuery(query));
                }
                ui.add_space(STANDARD_PADDING);

                ui.strong("Minimum popularity");
                let mut minimum = self.filters.popularity_minimum;
                if ui.add(Slider::new(&mut minimum, 0..=100)).changed() {
                    edits.push(FilterEdit::PopularityMinimum(minimum));
                }

                // A single frame only ever touches one control
                edits.pop()
            })
            .inner;

        edit.map(|edit| self.filters.apply(edit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_emits_nothing() {
        let ctx = egui::Context::default();
        let filters = FilterState::default();
        let mut result = Some(FilterState::default());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = FilterControls::new(&filters).show(ui);
            });
        });
        assert_eq!(result, None);
    }
}
