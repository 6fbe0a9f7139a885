use crate::app::SoundOxide;
use crate::chart::color::{cyan, lime, magenta, orange};
use crate::chart::format::percent;
use eframe::egui::{Color32, RichText, Ui};

const CARD_MIN_WIDTH: f32 = 160.0;

/// Headline averages over the current sample
pub fn render_kpis(app: &SoundOxide, ui: &mut Ui) {
    let kpis = &app.kpis;
    let matching_note = if app.state.filters.has_track_constraints() {
        "pass search and popularity floor"
    } else {
        "no search active"
    };
    let cards = [
        ("⚡ Avg Energy", percent(kpis.avg_energy), "across the sample", cyan()),
        ("❤ Avg Valence", percent(kpis.avg_valence), "across the sample", magenta()),
        ("💃 Danceability", percent(kpis.avg_danceability), "across the sample", orange()),
        (
            "🎵 Matching Tracks",
            format!("{} / {}", kpis.matching, kpis.sample_size),
            matching_note,
            lime(),
        ),
    ];

    ui.horizontal_wrapped(|ui| {
        for (label, value, note, color) in cards {
            kpi_card(ui, label, &value, note, color);
        }
    });
}

fn kpi_card(ui: &mut Ui, label: &str, value: &str, note: &str, color: Color32) {
    ui.group(|ui| {
        ui.set_min_width(CARD_MIN_WIDTH);
        ui.vertical(|ui| {
            ui.label(RichText::new(label).weak());
            ui.label(RichText::new(value).size(26.0).strong().color(color));
            ui.small(note);
        });
    });
}
