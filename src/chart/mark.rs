//! Data-bound shapes and their interpolation

use super::color::lerp_color;
use super::curve::{distance_to_polyline, lerp_f32, truncate};
use egui::{Color32, Pos2, Rect, pos2};

/// Shape of a mark in surface coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle { center: Pos2, radius: f32 },
    Rect { rect: Rect, corner_radius: f32 },
    /// Polyline drawn up to `progress` of its length
    Path { points: Vec<Pos2>, width: f32, progress: f32 },
}

impl Geometry {
    /// Zero-size version anchored where the shape grows from
    pub fn collapsed(&self) -> Geometry {
        match self {
            Geometry::Circle { center, .. } => Geometry::Circle {
                center: *center,
                radius: 0.0,
            },
            Geometry::Rect { rect, corner_radius } => Geometry::Rect {
                rect: Rect::from_min_max(pos2(rect.min.x, rect.max.y), rect.max),
                corner_radius: *corner_radius,
            },
            Geometry::Path { points, width, .. } => Geometry::Path {
                points: points.clone(),
                width: *width,
                progress: 0.0,
            },
        }
    }

    /// Interpolate towards `to`; shapes of a different kind jump straight to `to`
    pub fn lerp(&self, to: &Geometry, t: f32) -> Geometry {
        match (self, to) {
            (
                Geometry::Circle { center: c0, radius: r0 },
                Geometry::Circle { center: c1, radius: r1 },
            ) => Geometry::Circle {
                center: c0.lerp(*c1, t),
                radius: lerp_f32(*r0, *r1, t),
            },
            (
                Geometry::Rect { rect: a, corner_radius: r0 },
                Geometry::Rect { rect: b, corner_radius: r1 },
            ) => Geometry::Rect {
                rect: Rect::from_min_max(a.min.lerp(b.min, t), a.max.lerp(b.max, t)),
                corner_radius: lerp_f32(*r0, *r1, t),
            },
            (
                Geometry::Path { points: p0, width: w0, progress: g0 },
                Geometry::Path { points: p1, width: w1, progress: g1 },
            ) => {
                let points = if p0.len() == p1.len() {
                    p0.iter().zip(p1).map(|(a, b)| a.lerp(*b, t)).collect()
                } else {
                    p1.clone()
                };
                Geometry::Path {
                    points,
                    width: lerp_f32(*w0, *w1, t),
                    progress: lerp_f32(*g0, *g1, t),
                }
            }
            _ => to.clone(),
        }
    }

    /// Nothing of the shape is drawn: zero radius, zero-area rect or undrawn path
    pub fn is_collapsed(&self) -> bool {
        match self {
            Geometry::Circle { radius, .. } => *radius <= 0.0,
            Geometry::Rect { rect, .. } => rect.width() <= 0.0 || rect.height() <= 0.0,
            Geometry::Path { points, progress, .. } => points.len() < 2 || *progress <= 0.0,
        }
    }

    /// Whether `pos` touches the drawn part of the shape, with `slack` extra pixels of tolerance
    pub fn contains(&self, pos: Pos2, slack: f32) -> bool {
        if self.is_collapsed() {
            return false;
        }
        match self {
            Geometry::Circle { center, radius } => center.distance(pos) <= radius + slack,
            Geometry::Rect { rect, .. } => rect.expand(slack).contains(pos),
            Geometry::Path { points, width, progress } => {
                distance_to_polyline(&truncate(points, *progress), pos) <= width * 0.5 + slack
            }
        }
    }
}

/// Everything needed to paint a mark at one instant
#[derive(Clone, Debug, PartialEq)]
pub struct MarkVisual {
    pub geometry: Geometry,
    pub fill: Color32,
    /// Multiplier in [0,1] applied to `fill`
    pub opacity: f32,
}

impl MarkVisual {
    pub fn new(geometry: Geometry, fill: Color32) -> Self {
        Self {
            geometry,
            fill,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn collapsed(&self) -> MarkVisual {
        MarkVisual {
            geometry: self.geometry.collapsed(),
            ..self.clone()
        }
    }

    pub fn faded(&self) -> MarkVisual {
        MarkVisual {
            opacity: 0.0,
            ..self.clone()
        }
    }

    pub fn lerp(&self, to: &MarkVisual, t: f32) -> MarkVisual {
        MarkVisual {
            geometry: self.geometry.lerp(&to.geometry, t),
            fill: lerp_color(self.fill, to.fill, t),
            opacity: lerp_f32(self.opacity, to.opacity, t),
        }
    }

    /// Visible on screen and so able to take the pointer
    pub fn is_hittable(&self) -> bool {
        self.opacity > 0.0 && !self.geometry.is_collapsed()
    }

    /// Fill with opacity applied, ready for the painter
    pub fn color(&self) -> Color32 {
        self.fill.gamma_multiply(self.opacity)
    }
}

/// Target state of one datum, as produced by a chart spec
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    pub visual: MarkVisual,
    /// Text painted on top of the shape, one entry per line
    pub label: Vec<String>,
}

impl Mark {
    pub fn new(visual: MarkVisual) -> Self {
        Self {
            visual,
            label: Vec::new(),
        }
    }

    pub fn with_label(mut self, lines: Vec<String>) -> Self {
        self.label = lines;
        self
    }
}
