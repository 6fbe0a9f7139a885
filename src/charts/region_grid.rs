//! Country tiles grouped by continent, coloured by the selected map mode

use crate::chart::color::{cyan, genre_color, lime, magenta, muted, orange, primary};
use crate::chart::format::percent;
use crate::chart::{
    AnimationSpec, ChartRenderer, ChartSpec, Easing, Entrance, Geometry, Margin, Mark, MarkVisual,
};
use crate::constants::chart::{CONTINENT_HEADER, TILE_GAP, TILE_HEIGHT, TILE_MIN_WIDTH};
use crate::constants::data::CONTINENTS;
use crate::data::{DataProvider, Genre, RegionRecord};
use crate::state::{FilterState, MapMode};
use egui::{Color32, Pos2, Rect, pos2, vec2};

const MAX_COLUMNS: usize = 6;
const TILE_OPACITY: f32 = 0.35;
const LEGEND_STRIP: f32 = 28.0;

/// One region placed under its continent
#[derive(Clone, Debug, PartialEq)]
pub struct RegionTile {
    pub continent: &'static str,
    pub region: RegionRecord,
}

/// Arrange regions under their continents
///
/// Countries listed for a continent but missing from `regions` are skipped.
pub fn group_by_continent(regions: &[RegionRecord]) -> Vec<RegionTile> {
    let mut tiles = Vec::with_capacity(regions.len());
    for (continent, countries) in CONTINENTS {
        for country in countries {
            match regions.iter().find(|r| r.country == *country) {
                Some(region) => tiles.push(RegionTile {
                    continent,
                    region: region.clone(),
                }),
                None => tracing::debug!(country, "no region data, tile skipped"),
            }
        }
    }
    tiles
}

/// Tile colour for a map mode
pub fn tile_color(region: &RegionRecord, mode: MapMode) -> Color32 {
    match mode {
        MapMode::Genre => genre_color(region.dominant_genre),
        MapMode::Popularity if region.popularity > 70 => lime(),
        MapMode::Popularity if region.popularity > 40 => cyan(),
        MapMode::Energy if region.avg_energy > 0.7 => orange(),
        MapMode::Energy if region.avg_energy > 0.5 => magenta(),
        MapMode::Danceability if region.avg_danceability > 0.7 => lime(),
        MapMode::Danceability if region.avg_danceability > 0.5 => primary(),
        _ => muted(),
    }
}

/// Second tile line for a map mode
pub fn caption(region: &RegionRecord, mode: MapMode) -> String {
    match mode {
        MapMode::Genre => region.dominant_genre.label().to_string(),
        MapMode::Popularity => format!("Pop: {}", region.popularity),
        MapMode::Energy => format!("Energy: {}", percent(region.avg_energy)),
        MapMode::Danceability => format!("Dance: {}", percent(region.avg_danceability)),
    }
}

fn columns_for(width: f32) -> usize {
    (((width + TILE_GAP) / (TILE_MIN_WIDTH + TILE_GAP)).floor() as usize).clamp(1, MAX_COLUMNS)
}

/// Tile and header placement
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub tiles: Vec<Rect>,
    /// Continent name and the top-left of its header
    pub headers: Vec<(&'static str, Pos2)>,
    /// Total height used, headers included
    pub height: f32,
}

#[derive(Default)]
pub struct RegionGrid {
    pub mode: MapMode,
}

impl RegionGrid {
    pub fn new(mode: MapMode) -> Self {
        Self { mode }
    }

    /// Frame height needed to show every continent at `width`, legend strip included
    pub fn frame_height(width: f32) -> f32 {
        let columns = columns_for(width);
        LEGEND_STRIP
            + CONTINENTS
            .iter()
            .map(|(_, countries)| {
                let rows = countries.len().div_ceil(columns) as f32;
                CONTINENT_HEADER + rows * TILE_HEIGHT + (rows - 1.0).max(0.0) * TILE_GAP + TILE_GAP * 2.0
            })
            .sum::<f32>()
    }

    /// Legend entries for the current mode
    pub fn mode_legend(&self) -> Vec<(String, Color32)> {
        let tiers = |high: Color32, medium: Color32| {
            vec![
                ("High".to_string(), high),
                ("Medium".to_string(), medium),
                ("Low".to_string(), muted()),
            ]
        };
        match self.mode {
            MapMode::Genre => Genre::REGION_SET
                .iter()
                .map(|g| (g.label().to_string(), genre_color(*g)))
                .collect(),
            MapMode::Popularity => tiers(lime(), cyan()),
            MapMode::Energy => tiers(orange(), magenta()),
            MapMode::Danceability => tiers(lime(), primary()),
        }
    }
}

impl ChartRenderer<RegionGrid> {
    /// Where tile `index` is drawn at `now`, hover growth and running transitions included
    pub fn tile_rect(&self, index: usize, now: f64) -> Option<Rect> {
        match self.surface().visual(index, now)?.geometry {
            Geometry::Rect { rect, .. } if rect.width() > 0.0 && rect.height() > 0.0 => Some(rect),
            _ => None,
        }
    }
}

impl ChartSpec for RegionGrid {
    type Datum = RegionTile;
    type Layout = GridLayout;

    fn name(&self) -> &'static str {
        "region_grid"
    }

    fn fetch(&self, provider: &mut dyn DataProvider, _filters: &FilterState) -> Vec<RegionTile> {
        group_by_continent(&provider.fetch_regions())
    }

    fn margin(&self) -> Margin {
        Margin::new(LEGEND_STRIP, 0.0, 0.0, 0.0)
    }

    fn layout(&self, data: &[RegionTile], plot: Rect) -> GridLayout {
        let columns = columns_for(plot.width());
        let width = ((plot.width() - TILE_GAP * (columns - 1) as f32) / columns as f32).max(0.0);
        let mut layout = GridLayout::default();
        let mut y = plot.min.y;
        let mut column = 0;
        let mut continent = None;

        for tile in data {
            if continent != Some(tile.continent) {
                if continent.is_some() {
                    y += TILE_HEIGHT + TILE_GAP * 2.0;
                }
                layout.headers.push((tile.continent, pos2(plot.min.x, y)));
                y += CONTINENT_HEADER;
                column = 0;
                continent = Some(tile.continent);
            } else if column == columns {
                y += TILE_HEIGHT + TILE_GAP;
                column = 0;
            }
            let min = pos2(plot.min.x + column as f32 * (width + TILE_GAP), y);
            layout.tiles.push(Rect::from_min_size(min, vec2(width, TILE_HEIGHT)));
            column += 1;
        }
        if continent.is_some() {
            y += TILE_HEIGHT + TILE_GAP * 2.0;
        }
        layout.height = y - plot.min.y;
        layout
    }

    fn mark(&self, tile: &RegionTile, index: usize, layout: &GridLayout, _f: &FilterState) -> Mark {
        let rect = layout.tiles.get(index).copied().unwrap_or(Rect::NOTHING);
        Mark::new(
            MarkVisual::new(
                Geometry::Rect {
                    rect,
                    corner_radius: 8.0,
                },
                tile_color(&tile.region, self.mode),
            )
            .with_opacity(TILE_OPACITY),
        )
        .with_label(vec![
            tile.region.country.to_string(),
            caption(&tile.region, self.mode),
        ])
    }

    fn highlight(&self, visual: &MarkVisual) -> MarkVisual {
        let geometry = match &visual.geometry {
            Geometry::Rect { rect, corner_radius } => Geometry::Rect {
                rect: rect.expand(3.0),
                corner_radius: *corner_radius,
            },
            other => other.clone(),
        };
        MarkVisual {
            geometry,
            opacity: 0.55,
            ..visual.clone()
        }
    }

    fn tooltip(&self, tile: &RegionTile, _data: &[RegionTile]) -> Vec<String> {
        vec![
            tile.region.country.to_string(),
            format!("Dominant: {}", tile.region.dominant_genre),
            format!("Popularity: {}", tile.region.popularity),
        ]
    }

    fn animation(&self) -> AnimationSpec {
        AnimationSpec::new(0.4, 0.02)
            .with_easing(Easing::CubicOut)
            .with_entrance(Entrance::Fade)
    }

    fn legend(&self, _data: &[RegionTile]) -> Vec<(String, Color32)> {
        self.mode_legend()
    }

    fn annotations(&self, layout: &GridLayout) -> Vec<(Pos2, String)> {
        layout
            .headers
            .iter()
            .map(|(continent, pos)| (*pos, continent.to_uppercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartRenderer;
    use crate::data::{GenreCount, GenreTrendPoint, MockProvider, PopularityBin, TrackRecord};

    fn region(country: &'static str) -> RegionRecord {
        RegionRecord {
            country,
            dominant_genre: Genre::Jazz,
            popularity: 71,
            avg_energy: 0.6,
            avg_danceability: 0.5,
            total_streams: 250_000_000,
            top_genres: vec![Genre::Jazz, Genre::Pop],
        }
    }

    /// Region table with a few countries missing
    struct Sparse;

    impl DataProvider for Sparse {
        fn fetch_tracks(&mut self, _f: &FilterState) -> Vec<TrackRecord> {
            Vec::new()
        }
        fn fetch_genre_distribution(&mut self, _f: &FilterState) -> Vec<GenreCount> {
            Vec::new()
        }
        fn fetch_popularity_histogram(&mut self, _f: &FilterState) -> Vec<PopularityBin> {
            Vec::new()
        }
        fn fetch_genre_trends(&mut self) -> Vec<GenreTrendPoint> {
            Vec::new()
        }
        fn fetch_regions(&mut self) -> Vec<RegionRecord> {
            vec![region("Japan"), region("Brazil"), region("Atlantis")]
        }
    }

    #[test]
    fn test_missing_countries_are_skipped() {
        let tiles = RegionGrid::default().fetch(&mut Sparse, &FilterState::default());
        let names: Vec<_> = tiles.iter().map(|t| t.region.country).collect();
        assert_eq!(names, vec!["Brazil", "Japan"]);
        assert_eq!(tiles[0].continent, "South America");
    }

    #[test]
    fn test_thresholds_per_mode() {
        let mut r = region("Japan");
        assert_eq!(tile_color(&r, MapMode::Popularity), lime());
        r.popularity = 70;
        assert_eq!(tile_color(&r, MapMode::Popularity), cyan());
        r.popularity = 40;
        assert_eq!(tile_color(&r, MapMode::Popularity), muted());

        assert_eq!(tile_color(&r, MapMode::Energy), magenta());
        r.avg_energy = 0.75;
        assert_eq!(tile_color(&r, MapMode::Energy), orange());

        assert_eq!(tile_color(&r, MapMode::Danceability), muted());
        r.avg_danceability = 0.55;
        assert_eq!(tile_color(&r, MapMode::Danceability), primary());

        assert_eq!(tile_color(&r, MapMode::Genre), genre_color(Genre::Jazz));
    }

    #[test]
    fn test_captions_per_mode() {
        let r = region("Japan");
        assert_eq!(caption(&r, MapMode::Genre), "Jazz");
        assert_eq!(caption(&r, MapMode::Popularity), "Pop: 71");
        assert_eq!(caption(&r, MapMode::Energy), "Energy: 60%");
        assert_eq!(caption(&r, MapMode::Danceability), "Dance: 50%");
    }

    #[test]
    fn test_layout_wraps_rows_and_starts_continents_on_new_rows() {
        let mut provider = MockProvider::seeded(2);
        let grid = RegionGrid::default();
        let tiles = grid.fetch(&mut provider, &FilterState::default());
        assert_eq!(tiles.len(), 21);

        // Three columns: Europe's six countries take two rows
        let width = 3.0 * TILE_MIN_WIDTH + 2.0 * TILE_GAP;
        let plot = Rect::from_min_size(Pos2::ZERO, vec2(width, 2000.0));
        let layout = grid.layout(&tiles, plot);
        assert_eq!(layout.tiles.len(), 21);
        assert_eq!(layout.headers.len(), 6);

        let europe: Vec<Rect> = tiles
            .iter()
            .zip(&layout.tiles)
            .filter(|(t, _)| t.continent == "Europe")
            .map(|(_, r)| *r)
            .collect();
        assert_eq!(europe[0].min.y, europe[2].min.y);
        assert!(europe[3].min.y > europe[2].min.y);
        assert_eq!(europe[3].min.x, europe[0].min.x);
        assert!((layout.height + LEGEND_STRIP - RegionGrid::frame_height(width)).abs() < 1e-3);
    }

    #[test]
    fn test_mode_change_restyles_without_refetch() {
        let mut provider = MockProvider::seeded(4);
        let mut r = ChartRenderer::new(RegionGrid::default());
        let frame = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 900.0));
        r.update(&mut provider, &FilterState::default(), frame, 0.0);
        let before = r.data().to_vec();

        r.spec_mut().mode = MapMode::Popularity;
        r.restyle(10.0);
        assert_eq!(r.data(), before.as_slice());
        let settled = r.snapshot(20.0);
        for ((visual, mark), tile) in settled.iter().zip(&before) {
            assert_eq!(visual.fill, tile_color(&tile.region, MapMode::Popularity));
            assert_eq!(mark.label[1], caption(&tile.region, MapMode::Popularity));
        }
    }

    #[test]
    fn test_tiles_fade_in() {
        let mut provider = MockProvider::seeded(4);
        let mut r = ChartRenderer::new(RegionGrid::default());
        let frame = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 900.0));
        r.update(&mut provider, &FilterState::default(), frame, 0.0);
        assert_eq!(r.surface().visual(0, 0.0).map(|v| v.opacity), Some(0.0));
        assert_eq!(r.surface().visual(0, 5.0).map(|v| v.opacity), Some(TILE_OPACITY));
    }

    #[test]
    fn test_tile_rect_follows_hover_growth() {
        let mut provider = MockProvider::seeded(4);
        let mut r = ChartRenderer::new(RegionGrid::default());
        let frame = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 900.0));
        r.update(&mut provider, &FilterState::default(), frame, 0.0);
        let laid_out = r.layout().map(|l| l.tiles[0]).unwrap();
        assert_eq!(r.tile_rect(0, 5.0), Some(laid_out));

        assert!(r.pointer_moved(laid_out.center(), 5.0));
        let grown = r.tile_rect(0, 5.0).unwrap();
        let expected = laid_out.expand(3.0);
        assert!(grown.min.distance(expected.min) < 1e-3);
        assert!(grown.max.distance(expected.max) < 1e-3);
        assert_eq!(r.tile_rect(99, 5.0), None);
    }
}
