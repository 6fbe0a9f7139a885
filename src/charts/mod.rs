//! The dashboard's five charts, each a [`ChartSpec`](crate::chart::ChartSpec) for the shared engine

pub mod genre_bars;
pub mod popularity;
pub mod region_grid;
pub mod scatter;
pub mod trends;

pub use genre_bars::GenreDistribution;
pub use popularity::PopularityHistogram;
pub use region_grid::{RegionGrid, RegionTile};
pub use scatter::EmotionScatter;
pub use trends::GenreTrends;
