use crate::app::{MountedView, SoundOxide};
use crate::constants::layout::{SCATTER_ROW_SHARE, STANDARD_PADDING};
use crate::ui::render_decade_panel;
use crate::widgets::ChartCanvas;
use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

/// Scatter and decade highlights, then the distribution charts, then the trends
pub fn render_dashboard(app: &mut SoundOxide, ui: &mut Ui) {
    profiling::scope!("render_dashboard");

    let SoundOxide {
        state,
        config,
        provider,
        view,
        ..
    } = app;
    let MountedView::Dashboard(charts) = view else {
        return;
    };
    let filters = &state.filters;
    let heights = config.chart_heights;

    StripBuilder::new(ui)
        .size(Size::exact(heights.scatter))
        .size(Size::exact(STANDARD_PADDING))
        .size(Size::exact(heights.bars.max(heights.histogram)))
        .size(Size::exact(STANDARD_PADDING))
        .size(Size::exact(heights.trends))
        .vertical(|mut strip| {
            strip.strip(|builder| {
                builder
                    .size(Size::relative(SCATTER_ROW_SHARE))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            ChartCanvas::new(
                                &mut charts.scatter,
                                provider.as_mut(),
                                filters,
                                heights.scatter,
                            )
                            .show(ui);
                        });
                        strip.cell(|ui| {
                            let songs = provider.iconic_songs(filters.decade.year());
                            ScrollArea::vertical()
                                .id_salt("decade_panel")
                                .show(ui, |ui| render_decade_panel(filters.decade, songs, ui));
                        });
                    });
            });
            strip.empty();
            strip.strip(|builder| {
                builder
                    .size(Size::relative(0.5))
                    .size(Size::remainder())
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            ChartCanvas::new(&mut charts.genres, provider.as_mut(), filters, heights.bars)
                                .show(ui);
                        });
                        strip.cell(|ui| {
                            ChartCanvas::new(
                                &mut charts.popularity,
                                provider.as_mut(),
                                filters,
                                heights.histogram,
                            )
                            .show(ui);
                        });
                    });
            });
            strip.empty();
            strip.cell(|ui| {
                ChartCanvas::new(&mut charts.trends, provider.as_mut(), filters, heights.trends)
                    .show(ui);
            });
        });
}
