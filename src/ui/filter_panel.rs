use crate::app::SoundOxide;
use crate::widgets::FilterControls;
use eframe::egui::Ui;

pub fn render_filter_panel(app: &mut SoundOxide, ui: &mut Ui) {
    ui.heading("Filters");
    ui.separator();
    if let Some(next) = FilterControls::new(&app.state.filters).show(ui) {
        app.set_filters(next);
    }
}
