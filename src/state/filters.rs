//! Shared filter state
//!
//! `FilterState` is owned by the page and only ever replaced as a whole: every control emits a
//! [`FilterEdit`] and [`FilterState::apply`] returns a new value with exactly one field changed.

use crate::constants::data::DECADES;
use crate::data::{Genre, TrackRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten fixed decade buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Decade(u16);

impl Decade {
    /// Every decade, oldest first
    pub const ALL: [Decade; 10] = [
        Decade(1930),
        Decade(1940),
        Decade(1950),
        Decade(1960),
        Decade(1970),
        Decade(1980),
        Decade(1990),
        Decade(2000),
        Decade(2010),
        Decade(2020),
    ];

    /// Most recent decade
    pub const LATEST: Decade = Decade(2020);

    /// Returns `None` unless `year` is one of the decade markers
    pub fn new(year: u16) -> Option<Self> {
        DECADES.contains(&year).then_some(Decade(year))
    }

    /// Decade at a slider position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Slider position of this decade
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(Self::ALL.len() - 1)
    }

    pub fn year(&self) -> u16 {
        self.0
    }

    /// Label such as "1990s"
    pub fn label(&self) -> String {
        format!("{}s", self.0)
    }
}

impl Default for Decade {
    fn default() -> Self {
        Decade::LATEST
    }
}

impl TryFrom<u16> for Decade {
    type Error = String;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Decade::new(year).ok_or_else(|| format!("{} is not a decade marker", year))
    }
}

impl From<Decade> for u16 {
    fn from(decade: Decade) -> Self {
        decade.0
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Genre selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    /// Selector options, in display order
    pub const OPTIONS: [GenreFilter; 8] = [
        GenreFilter::All,
        GenreFilter::Only(Genre::Pop),
        GenreFilter::Only(Genre::Rock),
        GenreFilter::Only(Genre::HipHop),
        GenreFilter::Only(Genre::Jazz),
        GenreFilter::Only(Genre::Classical),
        GenreFilter::Only(Genre::Electronic),
        GenreFilter::Only(Genre::RnB),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GenreFilter::All => "All",
            GenreFilter::Only(genre) => genre.label(),
        }
    }
}

/// Field driving the scatter point colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Danceability,
    Energy,
    Acousticness,
    Genre,
    Year,
}

impl ColorMode {
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Danceability,
        ColorMode::Energy,
        ColorMode::Acousticness,
        ColorMode::Genre,
        ColorMode::Year,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorMode::Danceability => "Danceability",
            ColorMode::Energy => "Energy",
            ColorMode::Acousticness => "Acousticness",
            ColorMode::Genre => "Genre",
            ColorMode::Year => "Year",
        }
    }
}

/// The dashboard's single piece of shared state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub decade: Decade,
    pub genre: GenreFilter,
    pub artist_query: String,
    /// Inclusive lower bound, 0-100
    pub popularity_minimum: u8,
    pub color_mode: ColorMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            decade: Decade::LATEST,
            genre: GenreFilter::All,
            artist_query: String::new(),
            popularity_minimum: 0,
            color_mode: ColorMode::Danceability,
        }
    }
}

/// A single-field change requested by a filter control
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEdit {
    /// Decade slider position
    DecadeIndex(usize),
    Genre(GenreFilter),
    ColorMode(ColorMode),
    ArtistQuery(String),
    PopularityMinimum(u8),
}

impl FilterState {
    /// Build the replacement state for one edit
    ///
    /// Slider positions past the end clamp to the last decade.
    pub fn apply(&self, edit: FilterEdit) -> FilterState {
        let mut next = self.clone();
        match edit {
            FilterEdit::DecadeIndex(index) => {
                next.decade = Decade::from_index(index).unwrap_or(Decade::LATEST);
            }
            FilterEdit::Genre(genre) => next.genre = genre,
            FilterEdit::ColorMode(mode) => next.color_mode = mode,
            FilterEdit::ArtistQuery(query) => next.artist_query = query,
            FilterEdit::PopularityMinimum(min) => next.popularity_minimum = min.min(100),
        }
        next
    }

    /// Check whether the search or popularity floor narrows anything
    pub fn has_track_constraints(&self) -> bool {
        !self.artist_query.trim().is_empty() || self.popularity_minimum > 0
    }

    /// Whether a track passes the artist search and popularity minimum
    pub fn matches_track(&self, track: &TrackRecord) -> bool {
        let query = self.artist_query.trim();
        let artist_ok =
            query.is_empty() || track.artist.to_lowercase().contains(&query.to_lowercase());
        artist_ok && track.popularity >= self.popularity_minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(artist: &str, popularity: u8) -> TrackRecord {
        TrackRecord {
            name: "Track 1".to_string(),
            artist: artist.to_string(),
            energy: 0.5,
            valence: 0.5,
            danceability: 0.5,
            acousticness: 0.5,
            year: 2020,
            genre: Genre::Pop,
            popularity,
        }
    }

    #[test]
    fn test_defaults() {
        let filters = FilterState::default();
        assert_eq!(filters.decade.year(), 2020);
        assert_eq!(filters.genre, GenreFilter::All);
        assert!(filters.artist_query.is_empty());
        assert_eq!(filters.popularity_minimum, 0);
        assert_eq!(filters.color_mode, ColorMode::Danceability);
    }

    #[test]
    fn test_decade_domain() {
        assert!(Decade::new(1985).is_none());
        assert_eq!(Decade::new(1990).map(|d| d.index()), Some(6));
        assert_eq!(Decade::from_index(0).map(|d| d.year()), Some(1930));
        assert!(Decade::from_index(10).is_none());
        assert_eq!(Decade::LATEST.label(), "2020s");
    }

    #[test]
    fn test_apply_replaces_one_field() {
        let base = FilterState::default();

        let next = base.apply(FilterEdit::DecadeIndex(6));
        assert_eq!(next.decade.year(), 1990);
        assert_eq!(next.genre, base.genre);
        assert_eq!(next.color_mode, base.color_mode);

        let next = base.apply(FilterEdit::Genre(GenreFilter::Only(Genre::Jazz)));
        assert_eq!(next.genre, GenreFilter::Only(Genre::Jazz));
        assert_eq!(next.decade, base.decade);

        let next = base.apply(FilterEdit::ArtistQuery("artist 7".to_string()));
        assert_eq!(next.artist_query, "artist 7");
        assert_eq!(base.artist_query, "", "source state is left untouched");
    }

    #[test]
    fn test_decade_slider_is_bounded() {
        let next = FilterState::default()
            .apply(FilterEdit::DecadeIndex(0))
            .apply(FilterEdit::DecadeIndex(42));
        assert_eq!(next.decade, Decade::LATEST);
    }

    #[test]
    fn test_track_matching() {
        let filters = FilterState::default()
            .apply(FilterEdit::ArtistQuery("ARTIST 1".to_string()))
            .apply(FilterEdit::PopularityMinimum(40));
        assert!(filters.has_track_constraints());
        assert!(filters.matches_track(&track("Artist 12", 40)));
        assert!(!filters.matches_track(&track("Artist 12", 39)));
        assert!(!filters.matches_track(&track("Artist 2", 90)));
        assert!(FilterState::default().matches_track(&track("Artist 2", 0)));
    }

    #[test]
    fn test_serde_rejects_unknown_decade() {
        let ok: FilterState = serde_json::from_str(r#"{"decade": 1960, "color_mode": "year"}"#).unwrap();
        assert_eq!(ok.decade.year(), 1960);
        assert_eq!(ok.color_mode, ColorMode::Year);

        let bad = serde_json::from_str::<FilterState>(r#"{"decade": 1965}"#);
        assert!(bad.is_err());
    }
}
