use super::color::{lerp_color, rainbow};
use egui::Color32;
use std::hash::Hash;

/// Continuous data domain mapped onto a pixel range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        }
    }

    pub fn map(&self, value: f64) -> f32 {
        let d = self.domain_max - self.domain_min;
        if d.abs() < 1e-12 {
            return self.range_min;
        }
        let t = ((value - self.domain_min) / d) as f32;
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Round tick values (multiples of 1, 2 or 5 times a power of ten) inside the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain_min <= self.domain_max {
            (self.domain_min, self.domain_max)
        } else {
            (self.domain_max, self.domain_min)
        };
        let span = hi - lo;
        if span <= 0.0 || !span.is_finite() {
            return vec![lo];
        }
        let step = nice_step(span / count.max(1) as f64);
        let start = (lo / step - 1e-9).ceil() as i64;
        let stop = (hi / step + 1e-9).floor() as i64;
        (start..=stop).map(|k| k as f64 * step).collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized >= 50f64.sqrt() {
        10.0
    } else if normalized >= 10f64.sqrt() {
        5.0
    } else if normalized >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

/// Evenly spaced bands over a pixel range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f32,
    step: f32,
    band_width: f32,
}

impl BandScale {
    pub fn new(
        count: usize,
        range_min: f32,
        range_max: f32,
        padding_inner: f32,
        padding_outer: f32,
    ) -> Self {
        if count == 0 {
            return Self {
                count: 0,
                start: range_min,
                step: 0.0,
                band_width: 0.0,
            };
        }
        let count_f = count as f32;
        let span = (range_max - range_min).max(0.0);
        let denom = (count_f - padding_inner + 2.0 * padding_outer).max(1e-6);
        let step = span / denom;
        let band_width = step * (1.0 - padding_inner).max(0.0);
        let start = range_min + step * padding_outer;
        Self {
            count,
            start,
            step,
            band_width,
        }
    }

    /// Same inner and outer padding
    pub fn padded(count: usize, range_min: f32, range_max: f32, padding: f32) -> Self {
        Self::new(count, range_min, range_max, padding, padding)
    }

    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    pub fn band_start(&self, idx: usize) -> Option<f32> {
        if idx >= self.count {
            return None;
        }
        Some(self.start + self.step * idx as f32)
    }

    pub fn center(&self, idx: usize) -> Option<f32> {
        self.band_start(idx).map(|x| x + self.band_width * 0.5)
    }
}

/// Categorical keys mapped onto a repeating palette
#[derive(Clone, Debug)]
pub struct OrdinalScale<K> {
    domain: Vec<K>,
    range: Vec<Color32>,
}

impl<K: PartialEq + Eq + Hash + Clone> OrdinalScale<K> {
    pub fn new(domain: Vec<K>, range: Vec<Color32>) -> Self {
        Self { domain, range }
    }

    /// Colour for a key; keys outside the domain continue the palette
    pub fn get(&self, key: &K) -> Color32 {
        if self.range.is_empty() {
            return Color32::GRAY;
        }
        let idx = self
            .domain
            .iter()
            .position(|k| k == key)
            .unwrap_or(self.domain.len());
        self.range[idx % self.range.len()]
    }
}

/// How a sequential scale turns a unit value into a colour
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolator {
    /// Cyclic cubehelix rainbow; values wrap rather than clamp
    Rainbow,
    /// Straight RGB blend between two colours, clamped
    Rgb(Color32, Color32),
}

/// Continuous domain mapped onto a colour ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialScale {
    domain_min: f64,
    domain_max: f64,
    interpolator: Interpolator,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: Interpolator) -> Self {
        Self {
            domain_min: domain.0,
            domain_max: domain.1,
            interpolator,
        }
    }

    pub fn map(&self, value: f64) -> Color32 {
        let d = self.domain_max - self.domain_min;
        let t = if d.abs() < 1e-12 {
            0.0
        } else {
            (value - self.domain_min) / d
        };
        match self.interpolator {
            Interpolator::Rainbow => rainbow(t),
            Interpolator::Rgb(from, to) => lerp_color(from, to, t as f32),
        }
    }
}
