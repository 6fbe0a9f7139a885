//! Data provider layer
//!
//! Charts never generate data themselves; they ask a [`DataProvider`] for fresh records on every
//! render pass. The app runs on [`MockProvider`] with an entropy seed, tests inject a seeded one,
//! and a real backend only needs to implement the trait.

pub mod iconic;
pub mod mock;
pub mod records;
pub mod stats;

pub use iconic::songs_for_decade;
pub use mock::MockProvider;
pub use records::{
    Genre, GenreCount, GenreTrendPoint, IconicSong, KpiSummary, PopularityBin, RegionRecord,
    TrackRecord,
};

use crate::state::FilterState;

/// Source of the record sets consumed by the charts
///
/// Implementations may return different values for identical input; callers must not rely on
/// two calls agreeing.
pub trait DataProvider {
    /// Sample of tracks for the current filters
    fn fetch_tracks(&mut self, filters: &FilterState) -> Vec<TrackRecord>;

    /// One count per genre, sorted by count descending
    fn fetch_genre_distribution(&mut self, filters: &FilterState) -> Vec<GenreCount>;

    /// One count per popularity decile
    fn fetch_popularity_histogram(&mut self, filters: &FilterState) -> Vec<PopularityBin>;

    /// One point per (genre, decade)
    fn fetch_genre_trends(&mut self) -> Vec<GenreTrendPoint>;

    /// One record per country
    fn fetch_regions(&mut self) -> Vec<RegionRecord>;

    /// Landmark songs of a decade, falling back to the 2020s for unknown keys
    fn iconic_songs(&self, decade: u16) -> &'static [IconicSong] {
        songs_for_decade(decade)
    }
}
