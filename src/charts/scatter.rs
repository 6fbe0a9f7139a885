//! Energy/valence scatter of the track sample

use crate::chart::color::genre_color;
use crate::chart::format::{count_tick, percent};
use crate::chart::scale::{Interpolator, LinearScale, SequentialScale};
use crate::chart::{
    AnimationSpec, Axis, AxisSide, ChartSpec, Geometry, Margin, Mark, MarkVisual,
};
use crate::constants::chart::{
    POINT_HIT_SLACK, SCATTER_DIMMED_OPACITY, SCATTER_HOVER_RADIUS, SCATTER_OPACITY, SCATTER_RADIUS,
};
use crate::data::{DataProvider, Genre, TrackRecord};
use crate::state::{ColorMode, FilterState};
use egui::{Color32, Rect, pos2};

pub struct ScatterLayout {
    x: LinearScale,
    y: LinearScale,
}

#[derive(Default)]
pub struct EmotionScatter;

/// Point colour for the active colour mode
///
/// Continuous fields run through the rainbow ramp over [0,1], with year normalized as
/// `year / 2020`; genre uses the fixed categorical palette.
pub fn point_color(track: &TrackRecord, mode: ColorMode) -> Color32 {
    let ramp = SequentialScale::new((0.0, 1.0), Interpolator::Rainbow);
    match mode {
        ColorMode::Danceability => ramp.map(track.danceability),
        ColorMode::Energy => ramp.map(track.energy),
        ColorMode::Acousticness => ramp.map(track.acousticness),
        ColorMode::Year => ramp.map(track.year as f64 / 2020.0),
        ColorMode::Genre => genre_color(track.genre),
    }
}

impl ChartSpec for EmotionScatter {
    type Datum = TrackRecord;
    type Layout = ScatterLayout;

    fn name(&self) -> &'static str {
        "emotion_scatter"
    }

    fn fetch(&self, provider: &mut dyn DataProvider, filters: &FilterState) -> Vec<TrackRecord> {
        provider.fetch_tracks(filters)
    }

    fn margin(&self) -> Margin {
        Margin::new(40.0, 40.0, 60.0, 60.0)
    }

    fn layout(&self, _data: &[TrackRecord], plot: Rect) -> ScatterLayout {
        ScatterLayout {
            x: LinearScale::new((0.0, 1.0), (plot.min.x, plot.max.x)),
            y: LinearScale::new((0.0, 1.0), (plot.max.y, plot.min.y)),
        }
    }

    fn axes(&self, layout: &ScatterLayout, _data: &[TrackRecord]) -> Vec<Axis> {
        vec![
            Axis::linear(AxisSide::Bottom, &layout.x, 10, "Energy", count_tick),
            Axis::linear(AxisSide::Left, &layout.y, 10, "Valence (Happiness)", count_tick)
                .with_grid(),
        ]
    }

    fn mark(
        &self,
        track: &TrackRecord,
        _index: usize,
        layout: &ScatterLayout,
        filters: &FilterState,
    ) -> Mark {
        let center = pos2(layout.x.map(track.energy), layout.y.map(track.valence));
        let opacity = if filters.matches_track(track) {
            SCATTER_OPACITY
        } else {
            SCATTER_DIMMED_OPACITY
        };
        Mark::new(
            MarkVisual::new(
                Geometry::Circle {
                    center,
                    radius: SCATTER_RADIUS,
                },
                point_color(track, filters.color_mode),
            )
            .with_opacity(opacity),
        )
    }

    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        let geometry = match &visual.geometry {
            Geometry::Circle { center, .. } => Geometry::Circle {
                center: *center,
                radius: SCATTER_HOVER_RADIUS,
            },
            other => other.clone(),
        };
        MarkVisual {
            geometry,
            opacity: 1.0,
            ..visual.clone()
        }
    }

    fn tooltip(&self, track: &TrackRecord, _data: &[TrackRecord]) -> Vec<String> {
        vec![
            track.name.clone(),
            track.artist.clone(),
            format!("Energy: {}", percent(track.energy)),
            format!("Valence: {}", percent(track.valence)),
            format!("Dance: {}", percent(track.danceability)),
            format!("Year: {}", track.year),
        ]
    }

    fn animation(&self) -> AnimationSpec {
        AnimationSpec::new(0.8, 0.002)
    }

    fn hit_slack(&self) -> f32 {
        POINT_HIT_SLACK
    }

    fn legend(&self, data: &[TrackRecord]) -> Vec<(String, Color32)> {
        Genre::TRACK_SET
            .iter()
            .filter(|g| data.iter().any(|t| t.genre == **g))
            .map(|g| (g.label().to_string(), genre_color(*g)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartRenderer;
    use crate::chart::color::rainbow;
    use crate::data::MockProvider;
    use crate::state::FilterEdit;

    fn track() -> TrackRecord {
        TrackRecord {
            name: "Track 7".to_string(),
            artist: "Artist 12".to_string(),
            energy: 0.716,
            valence: 0.25,
            danceability: 0.4,
            acousticness: 0.9,
            year: 1994,
            genre: Genre::Rock,
            popularity: 40,
        }
    }

    fn frame() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(900.0, 500.0))
    }

    #[test]
    fn test_color_follows_mode() {
        let t = track();
        assert_eq!(point_color(&t, ColorMode::Danceability), rainbow(0.4));
        assert_eq!(point_color(&t, ColorMode::Energy), rainbow(0.716));
        assert_eq!(point_color(&t, ColorMode::Acousticness), rainbow(0.9));
        assert_eq!(point_color(&t, ColorMode::Year), rainbow(1994.0 / 2020.0));
        assert_eq!(point_color(&t, ColorMode::Genre), genre_color(Genre::Rock));
        assert_ne!(point_color(&t, ColorMode::Genre), point_color(&t, ColorMode::Year));
    }

    #[test]
    fn test_tooltip_uses_whole_percentages() {
        let lines = EmotionScatter.tooltip(&track(), &[]);
        assert_eq!(
            lines,
            vec!["Track 7", "Artist 12", "Energy: 72%", "Valence: 25%", "Dance: 40%", "Year: 1994"]
        );
    }

    #[test]
    fn test_points_are_placed_on_unit_axes() {
        let plot = Rect::from_min_max(pos2(60.0, 40.0), pos2(860.0, 440.0));
        let layout = EmotionScatter.layout(&[], plot);
        let mark = EmotionScatter.mark(&track(), 0, &layout, &FilterState::default());
        match mark.visual.geometry {
            Geometry::Circle { center, radius } => {
                assert!((center.x - (60.0 + 0.716 * 800.0)).abs() < 1e-3);
                assert!((center.y - 340.0).abs() < 1e-3);
                assert_eq!(radius, SCATTER_RADIUS);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(mark.visual.opacity, SCATTER_OPACITY);
    }

    #[test]
    fn test_search_dims_non_matching_tracks() {
        let layout = EmotionScatter.layout(&[], frame());
        let filters = FilterState::default().apply(FilterEdit::ArtistQuery("artist 3".into()));
        let dimmed = EmotionScatter.mark(&track(), 0, &layout, &filters);
        assert_eq!(dimmed.visual.opacity, SCATTER_DIMMED_OPACITY);

        let filters = FilterState::default().apply(FilterEdit::ArtistQuery("ARTIST 12".into()));
        let kept = EmotionScatter.mark(&track(), 0, &layout, &filters);
        assert_eq!(kept.visual.opacity, SCATTER_OPACITY);
    }

    #[test]
    fn test_hover_enlarges_point() {
        let layout = EmotionScatter.layout(&[], frame());
        let mark = EmotionScatter.mark(&track(), 0, &layout, &FilterState::default());
        let hovered = EmotionScatter.highlight(&mark.visual);
        assert!(matches!(hovered.geometry, Geometry::Circle { radius, .. } if radius == SCATTER_HOVER_RADIUS));
        assert_eq!(hovered.opacity, 1.0);
    }

    #[test]
    fn test_renders_full_sample() {
        let mut provider = MockProvider::seeded(3);
        let mut r = ChartRenderer::new(EmotionScatter);
        r.update(&mut provider, &FilterState::default(), frame(), 0.0);
        assert_eq!(r.surface().len(), 200);
        assert_eq!(r.surface().axes().len(), 2);

        // Every point starts collapsed
        for (visual, _) in r.snapshot(0.0) {
            assert!(matches!(visual.geometry, Geometry::Circle { radius, .. } if radius == 0.0));
        }
    }
}
