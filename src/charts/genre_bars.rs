//! Track counts per genre as rounded bars

use crate::chart::color::chart_palette;
use crate::chart::format::{count_tick, share};
use crate::chart::scale::{BandScale, LinearScale, OrdinalScale};
use crate::chart::{AnimationSpec, Axis, AxisSide, ChartSpec, Geometry, Margin, Mark, MarkVisual};
use crate::data::{DataProvider, Genre, GenreCount};
use crate::state::FilterState;
use egui::{Rect, pos2};

pub struct BarLayout {
    x: BandScale,
    y: LinearScale,
    colors: OrdinalScale<Genre>,
    baseline: f32,
}

#[derive(Default)]
pub struct GenreDistribution;

impl ChartSpec for GenreDistribution {
    type Datum = GenreCount;
    type Layout = BarLayout;

    fn name(&self) -> &'static str {
        "genre_distribution"
    }

    fn fetch(&self, provider: &mut dyn DataProvider, filters: &FilterState) -> Vec<GenreCount> {
        provider.fetch_genre_distribution(filters)
    }

    fn margin(&self) -> Margin {
        Margin::new(40.0, 40.0, 80.0, 60.0)
    }

    fn layout(&self, data: &[GenreCount], plot: Rect) -> BarLayout {
        let max = data.iter().map(|d| d.count).max().filter(|m| *m > 0).unwrap_or(100);
        BarLayout {
            x: BandScale::padded(data.len(), plot.min.x, plot.max.x, 0.2),
            y: LinearScale::new((0.0, max as f64), (plot.max.y, plot.min.y)),
            colors: OrdinalScale::new(
                data.iter().map(|d| d.genre).collect(),
                chart_palette().to_vec(),
            ),
            baseline: plot.max.y,
        }
    }

    fn axes(&self, layout: &BarLayout, data: &[GenreCount]) -> Vec<Axis> {
        vec![
            Axis::band(AxisSide::Bottom, &layout.x, data.len(), "", |i| {
                data.get(i).map(|d| d.genre.label().to_string()).unwrap_or_default()
            }),
            Axis::linear(AxisSide::Left, &layout.y, 8, "Track Count", count_tick).with_grid(),
        ]
    }

    fn mark(&self, d: &GenreCount, index: usize, layout: &BarLayout, _f: &FilterState) -> Mark {
        let x = layout.x.band_start(index).unwrap_or(0.0);
        let top = layout.y.map(d.count as f64);
        let rect = Rect::from_min_max(
            pos2(x, top),
            pos2(x + layout.x.band_width(), layout.baseline),
        );
        Mark::new(MarkVisual::new(
            Geometry::Rect {
                rect,
                corner_radius: 4.0,
            },
            layout.colors.get(&d.genre),
        ))
    }

    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        visual.clone().with_opacity(0.8)
    }

    fn tooltip(&self, d: &GenreCount, data: &[GenreCount]) -> Vec<String> {
        let total: u32 = data.iter().map(|g| g.count).sum();
        vec![
            d.genre.label().to_string(),
            format!("{} tracks", d.count),
            format!("{} of total", share(d.count as f64, total as f64)),
        ]
    }

    fn animation(&self) -> AnimationSpec {
        AnimationSpec::new(0.8, 0.05)
    }

    fn title(&self, filters: &FilterState) -> Option<String> {
        Some(format!("Genre Distribution - {}", filters.decade.label()))
    }
}
