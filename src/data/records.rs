//! Record types produced by a [`DataProvider`](super::DataProvider)
//!
//! Everything here is transient: records are built fresh for each render pass and handed to
//! the charts by value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Musical genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Rock,
    #[serde(rename = "Hip-Hop")]
    HipHop,
    Jazz,
    Electronic,
    #[serde(rename = "R&B")]
    RnB,
    Classical,
    Country,
}

impl Genre {
    /// Genres sampled for tracks when the filter is "All"
    pub const TRACK_SET: [Genre; 6] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Electronic,
        Genre::RnB,
    ];

    /// Genres counted in the distribution chart
    pub const DISTRIBUTION_SET: [Genre; 8] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Electronic,
        Genre::RnB,
        Genre::Classical,
        Genre::Country,
    ];

    /// Genres with a trend series
    pub const TREND_SET: [Genre; 5] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Electronic,
    ];

    /// Genres that can dominate a region
    pub const REGION_SET: [Genre; 7] = [
        Genre::Pop,
        Genre::Rock,
        Genre::HipHop,
        Genre::Jazz,
        Genre::Electronic,
        Genre::RnB,
        Genre::Classical,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::HipHop => "Hip-Hop",
            Genre::Jazz => "Jazz",
            Genre::Electronic => "Electronic",
            Genre::RnB => "R&B",
            Genre::Classical => "Classical",
            Genre::Country => "Country",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sampled track
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub name: String,
    pub artist: String,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub acousticness: f64,
    pub year: u16,
    pub genre: Genre,
    pub popularity: u8,
}

/// Track count for one genre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreCount {
    pub genre: Genre,
    pub count: u32,
}

/// Track count for one popularity decile
#[derive(Debug, Clone, PartialEq)]
pub struct PopularityBin {
    pub bin: &'static str,
    pub count: u32,
}

/// Average audio features of one genre in one decade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreTrendPoint {
    pub genre: Genre,
    pub decade: u16,
    pub avg_valence: f64,
    pub avg_energy: f64,
    pub avg_danceability: f64,
}

/// Listening profile of one country
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRecord {
    pub country: &'static str,
    pub dominant_genre: Genre,
    pub popularity: u8,
    pub avg_energy: f64,
    pub avg_danceability: f64,
    pub total_streams: u64,
    /// Up to three distinct genres, dominant first
    pub top_genres: Vec<Genre>,
}

/// A landmark song of a decade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconicSong {
    pub name: &'static str,
    pub artist: &'static str,
    pub energy: f64,
    pub valence: f64,
    pub danceability: f64,
    pub insight: Option<&'static str>,
}

/// Headline numbers over a track sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KpiSummary {
    pub avg_energy: f64,
    pub avg_valence: f64,
    pub avg_danceability: f64,
    pub sample_size: usize,
    /// Tracks that pass the artist search and popularity minimum
    pub matching: usize,
}
