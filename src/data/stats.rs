//! Summary statistics over track samples

use super::records::{KpiSummary, TrackRecord};
use crate::state::FilterState;

/// Arithmetic mean, zero for an empty slice
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Headline averages for the KPI cards
pub fn calculate_kpis(tracks: &[TrackRecord], filters: &FilterState) -> KpiSummary {
    if tracks.is_empty() {
        return KpiSummary::default();
    }

    KpiSummary {
        avg_energy: mean(tracks.iter().map(|t| t.energy)),
        avg_valence: mean(tracks.iter().map(|t| t.valence)),
        avg_danceability: mean(tracks.iter().map(|t| t.danceability)),
        sample_size: tracks.len(),
        matching: tracks.iter().filter(|t| filters.matches_track(t)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataProvider, Genre, MockProvider};
    use crate::state::FilterEdit;

    fn track(energy: f64, popularity: u8) -> TrackRecord {
        TrackRecord {
            name: "Track".to_string(),
            artist: "Artist 3".to_string(),
            energy,
            valence: 1.0 - energy,
            danceability: 0.5,
            acousticness: 0.0,
            year: 1990,
            genre: Genre::Rock,
            popularity,
        }
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(vec![1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_calculate_kpis() {
        let tracks = vec![track(0.2, 10), track(0.4, 50), track(0.9, 90)];
        let filters = FilterState::default().apply(FilterEdit::PopularityMinimum(50));
        let kpis = calculate_kpis(&tracks, &filters);

        assert!((kpis.avg_energy - 0.5).abs() < 1e-9);
        assert!((kpis.avg_valence - 0.5).abs() < 1e-9);
        assert_eq!(kpis.sample_size, 3);
        assert_eq!(kpis.matching, 2);
    }

    #[test]
    fn test_empty_sample() {
        let kpis = calculate_kpis(&[], &FilterState::default());
        assert_eq!(kpis, KpiSummary::default());
    }

    #[test]
    fn test_kpis_from_provider_sample() {
        let mut provider = MockProvider::seeded(11);
        let filters = FilterState::default();
        let kpis = calculate_kpis(&provider.fetch_tracks(&filters), &filters);
        assert_eq!(kpis.sample_size, 200);
        assert_eq!(kpis.matching, 200);
        assert!((0.0..=1.0).contains(&kpis.avg_energy));
    }
}
