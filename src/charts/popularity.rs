//! Track count per popularity decile

use crate::chart::color::{hsl, lerp_color};
use crate::chart::format::count_tick;
use crate::chart::scale::{BandScale, Interpolator, LinearScale, SequentialScale};
use crate::chart::{AnimationSpec, Axis, AxisSide, ChartSpec, Geometry, Margin, Mark, MarkVisual};
use crate::data::{DataProvider, PopularityBin};
use crate::state::FilterState;
use egui::{Color32, Rect, pos2};

pub struct HistogramLayout {
    x: BandScale,
    y: LinearScale,
    colors: SequentialScale,
    baseline: f32,
}

#[derive(Default)]
pub struct PopularityHistogram;

impl ChartSpec for PopularityHistogram {
    type Datum = PopularityBin;
    type Layout = HistogramLayout;

    fn name(&self) -> &'static str {
        "popularity_histogram"
    }

    fn fetch(&self, provider: &mut dyn DataProvider, filters: &FilterState) -> Vec<PopularityBin> {
        provider.fetch_popularity_histogram(filters)
    }

    fn margin(&self) -> Margin {
        Margin::new(40.0, 40.0, 60.0, 60.0)
    }

    fn layout(&self, data: &[PopularityBin], plot: Rect) -> HistogramLayout {
        let max = data.iter().map(|d| d.count).max().filter(|m| *m > 0).unwrap_or(100);
        let last = data.len().saturating_sub(1) as f64;
        HistogramLayout {
            x: BandScale::padded(data.len(), plot.min.x, plot.max.x, 0.1),
            y: LinearScale::new((0.0, max as f64), (plot.max.y, plot.min.y)),
            colors: SequentialScale::new(
                (0.0, last),
                Interpolator::Rgb(hsl(280.0, 0.70, 0.60), hsl(85.0, 0.85, 0.60)),
            ),
            baseline: plot.max.y,
        }
    }

    fn axes(&self, layout: &HistogramLayout, data: &[PopularityBin]) -> Vec<Axis> {
        vec![
            // Every other bin is labelled to keep the axis readable
            Axis::band(AxisSide::Bottom, &layout.x, data.len(), "Popularity Score", |i| {
                match data.get(i) {
                    Some(d) if i % 2 == 0 => d.bin.to_string(),
                    _ => String::new(),
                }
            }),
            Axis::linear(AxisSide::Left, &layout.y, 6, "Track Count", count_tick).with_grid(),
        ]
    }

    fn mark(
        &self,
        d: &PopularityBin,
        index: usize,
        layout: &HistogramLayout,
        _filters: &FilterState,
    ) -> Mark {
        let x = layout.x.band_start(index).unwrap_or(0.0);
        let rect = Rect::from_min_max(
            pos2(x, layout.y.map(d.count as f64)),
            pos2(x + layout.x.band_width(), layout.baseline),
        );
        Mark::new(MarkVisual::new(
            Geometry::Rect {
                rect,
                corner_radius: 2.0,
            },
            layout.colors.map(index as f64),
        ))
    }

    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        MarkVisual {
            fill: lerp_color(visual.fill, Color32::WHITE, 0.15),
            ..visual.clone()
        }
    }

    fn tooltip(&self, d: &PopularityBin, _data: &[PopularityBin]) -> Vec<String> {
        vec![format!("Popularity: {}", d.bin), format!("{} tracks", d.count)]
    }

    fn animation(&self) -> AnimationSpec {
        AnimationSpec::new(0.6, 0.03)
    }
}
