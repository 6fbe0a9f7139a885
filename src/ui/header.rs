use crate::app::SoundOxide;
use crate::state::ViewTab;
use eframe::egui::{self, RichText, Ui};

/// Title, tab switcher and the theme / re-roll buttons
pub fn render_header(app: &mut SoundOxide, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new("🎵 A Century of Sound").heading().strong());
            ui.small("Music Analytics Platform");
        });

        ui.separator();

        for (key, tab) in ViewTab::ALL.into_iter().enumerate() {
            let selected = app.state.view.tab == tab;
            let response = ui
                .selectable_label(selected, tab.label())
                .on_hover_text(format!("Shortcut: {}", key + 1));
            if response.clicked() {
                app.switch_tab(tab);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_icon = if app.state.view.dark_mode { "☀" } else { "🌙" };
            if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
                app.state.view.toggle_dark_mode();
            }
            if ui.button("🎲").on_hover_text("Re-roll data (R)").clicked() {
                app.reroll();
            }
        });
    });
}
