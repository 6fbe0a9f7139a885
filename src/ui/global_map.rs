use crate::app::{MapCharts, MountedView, SoundOxide};
use crate::chart::color::{genre_color, primary};
use crate::chart::format::{millions, percent};
use crate::charts::RegionGrid;
use crate::data::RegionRecord;
use crate::state::MapMode;
use crate::widgets::ChartCanvas;
use eframe::egui::{ComboBox, RichText, Stroke, StrokeKind, Ui};

/// Map mode selector, the region grid and the detail panel of the selected country
pub fn render_global_map(app: &mut SoundOxide, ui: &mut Ui) {
    profiling::scope!("render_global_map");

    let SoundOxide {
        state,
        provider,
        view,
        ..
    } = app;
    let MountedView::GlobalMap(MapCharts { grid }) = view else {
        return;
    };

    ui.horizontal(|ui| {
        ui.heading("Global Music Map");
        ui.add_space(20.0);
        ui.label("Color by:");
        let mut mode = state.view.map_mode;
        ComboBox::from_id_salt("map_mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for option in MapMode::ALL {
                    ui.selectable_value(&mut mode, option, option.label());
                }
            });
        if mode != state.view.map_mode {
            tracing::debug!(mode = mode.label(), "map mode changed");
            state.view.map_mode = mode;
            grid.spec_mut().mode = mode;
            grid.restyle(ui.input(|i| i.time));
        }
    });

    let height = RegionGrid::frame_height(ui.available_width());
    let canvas = ChartCanvas::new(grid, provider.as_mut(), &state.filters, height).show(ui);

    if let Some(tile) = canvas.clicked.and_then(|index| grid.data().get(index)) {
        state.view.toggle_region(tile.region.country);
    }

    let selected = state.view.selected_region.as_deref().and_then(|country| {
        grid.data()
            .iter()
            .position(|tile| tile.region.country == country)
    });

    let now = ui.input(|i| i.time);
    if let Some(rect) = selected.and_then(|index| grid.tile_rect(index, now)) {
        ui.painter_at(canvas.response.rect).rect_stroke(
            rect,
            8.0,
            Stroke::new(2.0, primary()),
            StrokeKind::Outside,
        );
    }

    if let Some(tile) = selected.and_then(|index| grid.data().get(index)) {
        ui.separator();
        render_region_detail(&tile.region, ui);
    }
}

fn render_region_detail(region: &RegionRecord, ui: &mut Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(region.country);
        ui.horizontal_wrapped(|ui| {
            stat(ui, "Popularity", region.popularity.to_string());
            ui.separator();
            stat(ui, "Energy", percent(region.avg_energy));
            ui.separator();
            stat(ui, "Danceability", percent(region.avg_danceability));
            ui.separator();
            stat(ui, "Streams", millions(region.total_streams));
        });
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Top genres:").weak());
            for genre in &region.top_genres {
                ui.label(RichText::new(genre.label()).color(genre_color(*genre)));
            }
        });
    });
}

fn stat(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak().small());
        ui.label(RichText::new(value).strong().size(18.0));
    });
}
