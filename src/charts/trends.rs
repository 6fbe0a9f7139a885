//! Average valence per genre across the decades, one smoothed line per genre

use crate::chart::color::chart_palette;
use crate::chart::curve::monotone_x;
use crate::chart::format::{decade_tick, percent};
use crate::chart::scale::{LinearScale, OrdinalScale};
use crate::chart::{
    AnimationSpec, Axis, AxisSide, ChartSpec, Easing, Geometry, Margin, Mark, MarkVisual,
};
use crate::constants::chart::{LINE_HIT_TOLERANCE, TREND_HOVER_STROKE, TREND_STROKE};
use crate::constants::data::DECADES;
use crate::data::{DataProvider, Genre, GenreTrendPoint};
use crate::state::FilterState;
use egui::{Color32, Rect, pos2};

/// All points of one genre, oldest decade first
#[derive(Clone, Debug, PartialEq)]
pub struct TrendSeries {
    pub genre: Genre,
    /// (decade, average valence)
    pub points: Vec<(u16, f64)>,
}

/// Group flat trend points into one series per genre, keeping first-seen genre order
pub fn group_series(points: &[GenreTrendPoint]) -> Vec<TrendSeries> {
    let mut series: Vec<TrendSeries> = Vec::new();
    for p in points {
        match series.iter_mut().find(|s| s.genre == p.genre) {
            Some(s) => s.points.push((p.decade, p.avg_valence)),
            None => series.push(TrendSeries {
                genre: p.genre,
                points: vec![(p.decade, p.avg_valence)],
            }),
        }
    }
    for s in &mut series {
        s.points.sort_by_key(|(decade, _)| *decade);
    }
    series
}

pub struct TrendLayout {
    x: LinearScale,
    y: LinearScale,
    colors: OrdinalScale<Genre>,
}

#[derive(Default)]
pub struct GenreTrends;

impl GenreTrends {
    fn colors() -> OrdinalScale<Genre> {
        OrdinalScale::new(Genre::TREND_SET.to_vec(), chart_palette()[..5].to_vec())
    }
}

impl ChartSpec for GenreTrends {
    type Datum = TrendSeries;
    type Layout = TrendLayout;

    fn name(&self) -> &'static str {
        "genre_trends"
    }

    fn fetch(&self, provider: &mut dyn DataProvider, _filters: &FilterState) -> Vec<TrendSeries> {
        group_series(&provider.fetch_genre_trends())
    }

    fn margin(&self) -> Margin {
        Margin::new(40.0, 120.0, 60.0, 60.0)
    }

    fn layout(&self, _data: &[TrendSeries], plot: Rect) -> TrendLayout {
        let first = DECADES[0] as f64;
        let last = DECADES[DECADES.len() - 1] as f64;
        TrendLayout {
            x: LinearScale::new((first, last), (plot.min.x, plot.max.x)),
            y: LinearScale::new((0.0, 1.0), (plot.max.y, plot.min.y)),
            colors: Self::colors(),
        }
    }

    fn axes(&self, layout: &TrendLayout, _data: &[TrendSeries]) -> Vec<Axis> {
        vec![
            Axis::linear(AxisSide::Bottom, &layout.x, 10, "", decade_tick),
            Axis::linear(AxisSide::Left, &layout.y, 10, "", percent).with_grid(),
        ]
    }

    fn mark(&self, s: &TrendSeries, _index: usize, layout: &TrendLayout, _f: &FilterState) -> Mark {
        let raw: Vec<_> = s
            .points
            .iter()
            .map(|(decade, valence)| pos2(layout.x.map(*decade as f64), layout.y.map(*valence)))
            .collect();
        Mark::new(
            MarkVisual::new(
                Geometry::Path {
                    points: monotone_x(&raw),
                    width: TREND_STROKE,
                    progress: 1.0,
                },
                layout.colors.get(&s.genre),
            )
            .with_opacity(0.8),
        )
    }

    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        let geometry = match &visual.geometry {
            Geometry::Path { points, progress, .. } => Geometry::Path {
                points: points.clone(),
                width: TREND_HOVER_STROKE,
                progress: *progress,
            },
            other => other.clone(),
        };
        MarkVisual {
            geometry,
            opacity: 1.0,
            ..visual.clone()
        }
    }

    fn tooltip(&self, s: &TrendSeries, _data: &[TrendSeries]) -> Vec<String> {
        let mut lines = vec![s.genre.label().to_string()];
        if let Some((decade, valence)) = s.points.first() {
            lines.push(format!("{}s: {} valence", decade, percent(*valence)));
        }
        if s.points.len() > 1 {
            if let Some((decade, valence)) = s.points.last() {
                lines.push(format!("{}s: {} valence", decade, percent(*valence)));
            }
        }
        lines
    }

    fn animation(&self) -> AnimationSpec {
        AnimationSpec::new(2.0, 0.15).with_easing(Easing::Linear)
    }

    fn hit_slack(&self) -> f32 {
        LINE_HIT_TOLERANCE
    }

    fn title(&self, _filters: &FilterState) -> Option<String> {
        Some("Genre Evolution Over Time".to_string())
    }

    fn legend(&self, data: &[TrendSeries]) -> Vec<(String, Color32)> {
        let colors = Self::colors();
        data.iter()
            .map(|s| (s.genre.label().to_string(), colors.get(&s.genre)))
            .collect()
    }
}
