use super::scale::{BandScale, LinearScale};
use egui::{Rect, pos2};

/// Space reserved around the plot area, in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Plot rectangle inside `frame`; never inverted even for tiny frames
    pub fn inner(&self, frame: Rect) -> Rect {
        let min = pos2(frame.min.x + self.left, frame.min.y + self.top);
        let max = pos2(
            (frame.max.x - self.right).max(min.x),
            (frame.max.y - self.bottom).max(min.y),
        );
        Rect::from_min_max(min, max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel offset along the axis (x for bottom, y for left)
    pub position: f32,
    /// Empty for unlabelled ticks
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub ticks: Vec<Tick>,
    pub title: String,
    /// Draw horizontal/vertical grid lines across the plot at each tick
    pub grid: bool,
}

impl Axis {
    pub fn linear(
        side: AxisSide,
        scale: &LinearScale,
        count: usize,
        title: impl Into<String>,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick {
                position: scale.map(v),
                label: format(v),
            })
            .collect();
        Self {
            side,
            ticks,
            title: title.into(),
            grid: false,
        }
    }

    /// One tick per band, labelled by `label(index)`
    pub fn band(
        side: AxisSide,
        scale: &BandScale,
        count: usize,
        title: impl Into<String>,
        label: impl Fn(usize) -> String,
    ) -> Self {
        let ticks = (0..count)
            .filter_map(|i| {
                scale.center(i).map(|position| Tick {
                    position,
                    label: label(i),
                })
            })
            .collect();
        Self {
            side,
            ticks,
            title: title.into(),
            grid: false,
        }
    }

    pub fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_inner_never_inverts() {
        let m = Margin::new(40.0, 40.0, 60.0, 60.0);
        let inner = m.inner(Rect::from_min_max(pos2(0.0, 0.0), pos2(500.0, 400.0)));
        assert_eq!(inner, Rect::from_min_max(pos2(60.0, 40.0), pos2(460.0, 340.0)));

        let tiny = m.inner(Rect::from_min_max(pos2(0.0, 0.0), pos2(50.0, 50.0)));
        assert!(tiny.width() >= 0.0 && tiny.height() >= 0.0);
    }

    #[test]
    fn test_band_axis_labels_every_band() {
        let scale = BandScale::padded(4, 0.0, 400.0, 0.2);
        let axis = Axis::band(AxisSide::Bottom, &scale, 4, "Genre", |i| format!("g{}", i));
        assert_eq!(axis.ticks.len(), 4);
        assert_eq!(axis.ticks[3].label, "g3");
        assert!(axis.ticks[0].position < axis.ticks[1].position);
    }
}
