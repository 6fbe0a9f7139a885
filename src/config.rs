//! Optional JSON configuration for the dashboard window
//!
//! Every field has a default, so a config file only needs the keys it wants to change.

use crate::constants::config::CONFIG_ENV;
use crate::constants::layout::{BAR_HEIGHT, HISTOGRAM_HEIGHT, SCATTER_HEIGHT, TRENDS_HEIGHT};
use crate::error::{DashboardError, Result};
use crate::state::FilterState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Surface heights of the dashboard charts, margins included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartHeights {
    pub scatter: f32,
    pub bars: f32,
    pub histogram: f32,
    pub trends: f32,
}

impl Default for ChartHeights {
    fn default() -> Self {
        Self {
            scatter: SCATTER_HEIGHT,
            bars: BAR_HEIGHT,
            histogram: HISTOGRAM_HEIGHT,
            trends: TRENDS_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dark_mode: bool,
    /// Fixed seed for reproducible mock data; entropy when absent
    pub seed: Option<u64>,
    /// Filters applied on start-up
    pub filters: FilterState,
    pub chart_heights: ChartHeights,
    /// Multiplier on every transition duration; 0 disables animation
    pub animation_speed: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            seed: None,
            filters: FilterState::default(),
            chart_heights: ChartHeights::default(),
            animation_speed: 1.0,
        }
    }
}

impl DashboardConfig {
    /// Read and validate a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: DashboardConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from the path in `SOUND_OXIDE_CONFIG`, or defaults
    ///
    /// A missing variable is silent; an unreadable or invalid file is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "{}: {}; using defaults",
                    e.title(),
                    e.user_message()
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.animation_speed.is_finite() || self.animation_speed < 0.0 {
            return Err(DashboardError::Config(format!(
                "animation_speed must be a non-negative number, got {}",
                self.animation_speed
            )));
        }
        let heights = self.chart_heights;
        for (name, value) in [
            ("scatter", heights.scatter),
            ("bars", heights.bars),
            ("histogram", heights.histogram),
            ("trends", heights.trends),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DashboardError::Config(format!(
                    "chart_heights.{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
