use crate::chart::color::{cyan, lime, magenta};
use crate::chart::format::percent;
use crate::data::IconicSong;
use crate::state::Decade;
use eframe::egui::{Color32, RichText, Ui};

/// Landmark songs of the selected decade
pub fn render_decade_panel(decade: Decade, songs: &[IconicSong], ui: &mut Ui) {
    ui.heading(format!("Your Sound in the {}", decade.label()));
    ui.add_space(4.0);

    for song in songs {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(song.name).strong());
            ui.label(RichText::new(song.artist).weak());
            ui.horizontal_wrapped(|ui| {
                badge(ui, "Energy", song.energy, cyan());
                badge(ui, "Valence", song.valence, magenta());
                badge(ui, "Dance", song.danceability, lime());
            });
            if let Some(insight) = song.insight {
                ui.label(RichText::new(format!("\"{insight}\"")).italics().small());
            }
        });
    }
}

fn badge(ui: &mut Ui, name: &str, value: f64, color: Color32) {
    ui.label(
        RichText::new(format!("{name}: {}", percent(value)))
            .small()
            .color(color),
    );
}
