//! Random record generator standing in for a real catalogue backend

use super::DataProvider;
use super::records::{Genre, GenreCount, GenreTrendPoint, PopularityBin, RegionRecord, TrackRecord};
use crate::constants::data::*;
use crate::state::{FilterState, GenreFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mock provider drawing every value uniformly from a fixed range
pub struct MockProvider<R: Rng = StdRng> {
    rng: R,
}

impl MockProvider<StdRng> {
    /// Reproducible provider for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Provider seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> MockProvider<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }
}

/// Per-genre valence baseline and decade trend
fn valence_trend(genre: Genre, decade: u16) -> (f64, f64) {
    let d = decade as f64;
    match genre {
        Genre::Pop => (0.65, (d - 1930.0) * 0.002),
        Genre::Rock => (0.55, (d - 1960.0).max(0.0) * 0.003),
        Genre::HipHop => (0.60, (d - 1980.0).max(0.0) * 0.004),
        Genre::Jazz => (0.70, -(d - 1930.0) * 0.001),
        Genre::Electronic => (0.58, (d - 1980.0).max(0.0) * 0.005),
        _ => (0.5, 0.0),
    }
}

impl<R: Rng> DataProvider for MockProvider<R> {
    fn fetch_tracks(&mut self, filters: &FilterState) -> Vec<TrackRecord> {
        profiling::scope!("fetch_tracks");

        let single;
        let genres: &[Genre] = match filters.genre {
            GenreFilter::All => &Genre::TRACK_SET,
            GenreFilter::Only(genre) => {
                single = [genre];
                &single
            }
        };
        let decade = filters.decade.year();

        (0..TRACK_SAMPLE_SIZE)
            .map(|i| TrackRecord {
                name: format!("Track {}", i + 1),
                artist: format!("Artist {}", self.rng.random_range(1..=ARTIST_POOL)),
                energy: self.rng.random::<f64>(),
                valence: self.rng.random::<f64>(),
                danceability: self.rng.random::<f64>(),
                acousticness: self.rng.random::<f64>(),
                year: decade + self.rng.random_range(0..10),
                genre: self.pick(genres),
                popularity: self.rng.random_range(0..=100),
            })
            .collect()
    }

    fn fetch_genre_distribution(&mut self, _filters: &FilterState) -> Vec<GenreCount> {
        let mut counts: Vec<GenreCount> = Genre::DISTRIBUTION_SET
            .iter()
            .map(|&genre| GenreCount {
                genre,
                count: self.rng.random_range(GENRE_COUNT_MIN..GENRE_COUNT_MAX),
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    fn fetch_popularity_histogram(&mut self, _filters: &FilterState) -> Vec<PopularityBin> {
        POPULARITY_BINS
            .iter()
            .map(|&bin| PopularityBin {
                bin,
                count: self.rng.random_range(POPULARITY_COUNT_MIN..POPULARITY_COUNT_MAX),
            })
            .collect()
    }

    fn fetch_genre_trends(&mut self) -> Vec<GenreTrendPoint> {
        profiling::scope!("fetch_genre_trends");

        let mut points = Vec::with_capacity(Genre::TREND_SET.len() * DECADES.len());
        for genre in Genre::TREND_SET {
            for decade in DECADES {
                let (base, trend) = valence_trend(genre, decade);
                let noise = self.rng.random_range(-TREND_NOISE..TREND_NOISE);
                points.push(GenreTrendPoint {
                    genre,
                    decade,
                    avg_valence: (base + trend + noise).clamp(TREND_VALENCE_MIN, TREND_VALENCE_MAX),
                    avg_energy: self.rng.random::<f64>() * 0.4 + 0.5,
                    avg_danceability: self.rng.random::<f64>() * 0.4 + 0.4,
                });
            }
        }
        points
    }

    fn fetch_regions(&mut self) -> Vec<RegionRecord> {
        COUNTRIES
            .iter()
            .map(|&country| {
                let dominant_genre = self.pick(&Genre::REGION_SET);
                let draws = [dominant_genre, self.pick(&Genre::REGION_SET), self.pick(&Genre::REGION_SET)];
                let mut top_genres: Vec<Genre> = Vec::with_capacity(3);
                for genre in draws {
                    if !top_genres.contains(&genre) {
                        top_genres.push(genre);
                    }
                }
                top_genres.truncate(3);

                RegionRecord {
                    country,
                    dominant_genre,
                    popularity: self.rng.random_range(60..100),
                    avg_energy: self.rng.random::<f64>() * 0.3 + 0.5,
                    avg_danceability: self.rng.random::<f64>() * 0.3 + 0.5,
                    total_streams: self.rng.random_range(STREAMS_MIN..STREAMS_MAX),
                    top_genres,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Decade, FilterEdit};
    use std::collections::HashSet;

    fn unit(v: f64) -> bool {
        (0.0..=1.0).contains(&v)
    }

    #[test]
    fn test_tracks_for_every_filter() {
        let mut provider = MockProvider::seeded(7);
        for decade in Decade::ALL {
            for genre in GenreFilter::OPTIONS {
                let filters = FilterState {
                    decade,
                    genre,
                    ..FilterState::default()
                };
                let tracks = provider.fetch_tracks(&filters);
                assert_eq!(tracks.len(), 200);
                for t in &tracks {
                    assert!(unit(t.energy) && unit(t.valence));
                    assert!(unit(t.danceability) && unit(t.acousticness));
                    assert!(t.popularity <= 100);
                    assert!(t.year >= decade.year() && t.year <= decade.year() + 9);
                    if let GenreFilter::Only(g) = genre {
                        assert_eq!(t.genre, g);
                    } else {
                        assert!(Genre::TRACK_SET.contains(&t.genre));
                    }
                }
            }
        }
    }

    #[test]
    fn test_track_names_and_artists() {
        let mut provider = MockProvider::seeded(1);
        let tracks = provider.fetch_tracks(&FilterState::default());
        assert_eq!(tracks[0].name, "Track 1");
        assert_eq!(tracks[199].name, "Track 200");
        for t in &tracks {
            let n: u32 = t.artist.trim_start_matches("Artist ").parse().unwrap();
            assert!((1..=50).contains(&n));
        }
    }

    #[test]
    fn test_genre_distribution_sorted_and_unique() {
        let mut provider = MockProvider::seeded(3);
        for _ in 0..20 {
            let dist = provider.fetch_genre_distribution(&FilterState::default());
            assert_eq!(dist.len(), 8);
            let unique: HashSet<Genre> = dist.iter().map(|g| g.genre).collect();
            assert_eq!(unique.len(), 8);
            assert!(dist.windows(2).all(|w| w[0].count >= w[1].count));
            assert!(dist.iter().all(|g| (100..400).contains(&g.count)));
        }
    }

    #[test]
    fn test_popularity_histogram_bins() {
        let mut provider = MockProvider::seeded(4);
        let bins = provider.fetch_popularity_histogram(&FilterState::default());
        let labels: Vec<&str> = bins.iter().map(|b| b.bin).collect();
        assert_eq!(labels, POPULARITY_BINS.to_vec());
        assert!(bins.iter().all(|b| (50..250).contains(&b.count)));
    }

    #[test]
    fn test_genre_trends_shape_and_clamp() {
        for seed in 0..50 {
            let mut provider = MockProvider::seeded(seed);
            let points = provider.fetch_genre_trends();
            assert_eq!(points.len(), 50);
            for p in &points {
                assert!((0.3..=0.9).contains(&p.avg_valence), "valence {}", p.avg_valence);
                assert!((0.5..0.9).contains(&p.avg_energy));
                assert!((0.4..0.8).contains(&p.avg_danceability));
            }
        }
    }

    #[test]
    fn test_valence_trend_formulas() {
        assert_eq!(valence_trend(Genre::Rock, 1950), (0.55, 0.0));
        let (base, trend) = valence_trend(Genre::Electronic, 2020);
        assert_eq!(base, 0.58);
        assert!((trend - 0.2).abs() < 1e-9);
        let (_, jazz) = valence_trend(Genre::Jazz, 2020);
        assert!((jazz + 0.09).abs() < 1e-9);
    }

    #[test]
    fn test_regions() {
        let mut provider = MockProvider::seeded(9);
        for _ in 0..20 {
            let regions = provider.fetch_regions();
            assert_eq!(regions.len(), 21);
            let countries: Vec<&str> = regions.iter().map(|r| r.country).collect();
            assert_eq!(countries, COUNTRIES.to_vec());
            for r in &regions {
                assert!(!r.top_genres.is_empty() && r.top_genres.len() <= 3);
                assert_eq!(r.top_genres[0], r.dominant_genre);
                let unique: HashSet<Genre> = r.top_genres.iter().copied().collect();
                assert_eq!(unique.len(), r.top_genres.len());
                assert!(Genre::REGION_SET.contains(&r.dominant_genre));
                assert!((60..100).contains(&r.popularity));
                assert!((STREAMS_MIN..STREAMS_MAX).contains(&r.total_streams));
            }
        }
    }

    #[test]
    fn test_seeded_providers_agree() {
        let filters = FilterState::default().apply(FilterEdit::DecadeIndex(2));
        let a = MockProvider::seeded(42).fetch_tracks(&filters);
        let b = MockProvider::seeded(42).fetch_tracks(&filters);
        assert_eq!(a, b);
    }

    #[test]
    fn test_iconic_songs_through_provider() {
        let provider = MockProvider::seeded(0);
        assert_eq!(provider.iconic_songs(1985), provider.iconic_songs(2020));
        assert_eq!(provider.iconic_songs(1950)[0].name, "Rock Around the Clock");
    }
}
