//! Application-wide constants and default values
//!
//! This module centralizes the fixed domains, magic numbers and default values used
//! throughout the dashboard, making them easier to maintain and configure.

/// Fixed data domains and generator parameters
pub mod data {
    /// Decade buckets, oldest first
    pub const DECADES: [u16; 10] = [1930, 1940, 1950, 1960, 1970, 1980, 1990, 2000, 2010, 2020];

    /// Decade used when a lookup key is missing
    pub const FALLBACK_DECADE: u16 = 2020;

    /// Number of tracks in every sample
    pub const TRACK_SAMPLE_SIZE: usize = 200;

    /// Number of distinct mock artists
    pub const ARTIST_POOL: u32 = 50;

    /// Genre distribution count range (half-open)
    pub const GENRE_COUNT_MIN: u32 = 100;
    pub const GENRE_COUNT_MAX: u32 = 400;

    /// Popularity histogram count range (half-open)
    pub const POPULARITY_COUNT_MIN: u32 = 50;
    pub const POPULARITY_COUNT_MAX: u32 = 250;

    /// Popularity histogram bin labels
    pub const POPULARITY_BINS: [&str; 10] = [
        "0-10", "10-20", "20-30", "30-40", "40-50", "50-60", "60-70", "70-80", "80-90", "90-100",
    ];

    /// Valence clamp applied to genre trend points
    pub const TREND_VALENCE_MIN: f64 = 0.3;
    pub const TREND_VALENCE_MAX: f64 = 0.9;

    /// Half-width of the uniform valence noise
    pub const TREND_NOISE: f64 = 0.05;

    /// Region countries, grouped in continent order
    pub const COUNTRIES: [&str; 21] = [
        "USA", "Canada", "Mexico", "Brazil", "Argentina", "Colombia",
        "UK", "Germany", "France", "Spain", "Italy", "Sweden",
        "Japan", "South Korea", "India", "China",
        "South Africa", "Nigeria", "Egypt",
        "Australia", "New Zealand",
    ];

    /// Continent grouping used by the region grid
    pub const CONTINENTS: [(&str, &[&str]); 6] = [
        ("North America", &["USA", "Canada", "Mexico"]),
        ("South America", &["Brazil", "Argentina", "Colombia"]),
        ("Europe", &["UK", "Germany", "France", "Spain", "Italy", "Sweden"]),
        ("Asia", &["Japan", "South Korea", "India", "China"]),
        ("Africa", &["South Africa", "Nigeria", "Egypt"]),
        ("Oceania", &["Australia", "New Zealand"]),
    ];

    /// Region stream count range (half-open)
    pub const STREAMS_MIN: u64 = 100_000_000;
    pub const STREAMS_MAX: u64 = 600_000_000;
}

/// Chart geometry and animation defaults
pub mod chart {
    /// Scatter point radius at rest and while hovered
    pub const SCATTER_RADIUS: f32 = 5.0;
    pub const SCATTER_HOVER_RADIUS: f32 = 8.0;

    /// Scatter point opacity at rest, and for tracks filtered out by the search
    pub const SCATTER_OPACITY: f32 = 0.7;
    pub const SCATTER_DIMMED_OPACITY: f32 = 0.12;

    /// Trend line stroke width at rest and while hovered
    pub const TREND_STROKE: f32 = 3.0;
    pub const TREND_HOVER_STROKE: f32 = 4.5;

    /// Pointer distance (px) that still counts as touching a line
    pub const LINE_HIT_TOLERANCE: f32 = 6.0;

    /// Extra pointer slack (px) around circles
    pub const POINT_HIT_SLACK: f32 = 2.0;

    /// Samples per segment when smoothing a monotone curve
    pub const CURVE_SAMPLES: usize = 8;

    /// Minimum tile width in the region grid
    pub const TILE_MIN_WIDTH: f32 = 120.0;
    pub const TILE_HEIGHT: f32 = 58.0;
    pub const TILE_GAP: f32 = 10.0;
    pub const CONTINENT_HEADER: f32 = 24.0;

    /// Tooltip offset from the pointer, as in the web dashboard (+10, -28)
    pub const OVERLAY_OFFSET: [f32; 2] = [10.0, -28.0];
}

/// UI layout defaults
pub mod layout {
    /// Chart heights (surface, margins included)
    pub const SCATTER_HEIGHT: f32 = 500.0;
    pub const BAR_HEIGHT: f32 = 400.0;
    pub const HISTOGRAM_HEIGHT: f32 = 350.0;
    pub const TRENDS_HEIGHT: f32 = 400.0;

    /// Share of the row given to the scatter next to the decade panel
    pub const SCATTER_ROW_SHARE: f32 = 0.66;

    /// Width of the filter side panel
    pub const FILTER_PANEL_WIDTH: f32 = 240.0;

    /// Standard UI element padding
    pub const STANDARD_PADDING: f32 = 10.0;
}

/// Configuration file lookup
pub mod config {
    /// Environment variable holding an optional configuration path
    pub const CONFIG_ENV: &str = "SOUND_OXIDE_CONFIG";

    /// Default log filter when RUST_LOG is unset
    pub const DEFAULT_LOG_FILTER: &str = "sound_oxide=info";
}
