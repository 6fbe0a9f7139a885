//! Polyline helpers: monotone smoothing, partial drawing and distance queries

use crate::constants::chart::CURVE_SAMPLES;
use egui::{Pos2, pos2};

pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Densify `points` (sorted by x) into a monotone cubic curve
///
/// Tangents follow Steffen's method so the curve never overshoots between points; each
/// segment is sampled `CURVE_SAMPLES` times.
pub fn monotone_x(points: &[Pos2]) -> Vec<Pos2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let secant = |i: usize| {
        let h = points[i + 1].x - points[i].x;
        if h.abs() < f32::EPSILON {
            0.0
        } else {
            (points[i + 1].y - points[i].y) / h
        }
    };

    let mut tangents = vec![0.0f32; n];
    for i in 1..n - 1 {
        let h0 = points[i].x - points[i - 1].x;
        let h1 = points[i + 1].x - points[i].x;
        let s0 = secant(i - 1);
        let s1 = secant(i);
        let p = if h0 + h1 > 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
        tangents[i] = (s0.signum() + s1.signum()) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }
    tangents[0] = end_tangent(points[1].x - points[0].x, secant(0), tangents[1]);
    tangents[n - 1] = end_tangent(
        points[n - 1].x - points[n - 2].x,
        secant(n - 2),
        tangents[n - 2],
    );

    let mut out = Vec::with_capacity((n - 1) * CURVE_SAMPLES + 1);
    out.push(points[0]);
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let dx = (b.x - a.x) / 3.0;
        let c1 = pos2(a.x + dx, a.y + dx * tangents[i]);
        let c2 = pos2(b.x - dx, b.y - dx * tangents[i + 1]);
        for step in 1..=CURVE_SAMPLES {
            let t = step as f32 / CURVE_SAMPLES as f32;
            out.push(cubic_bezier(a, c1, c2, b, t));
        }
    }
    out
}

fn end_tangent(h: f32, secant: f32, neighbour: f32) -> f32 {
    if h.abs() < f32::EPSILON {
        neighbour
    } else {
        (3.0 * secant - neighbour) / 2.0
    }
}

fn cubic_bezier(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    pos2(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

pub fn length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Leading part of the polyline covering `progress` of its arc length
pub fn truncate(points: &[Pos2], progress: f32) -> Vec<Pos2> {
    if progress >= 1.0 || points.len() < 2 {
        return points.to_vec();
    }
    if progress <= 0.0 {
        return points.first().map(|p| vec![*p]).unwrap_or_default();
    }
    let mut remaining = length(points) * progress;
    let mut out = vec![points[0]];
    for w in points.windows(2) {
        let seg = w[0].distance(w[1]);
        if seg >= remaining {
            let t = if seg > 0.0 { remaining / seg } else { 0.0 };
            out.push(w[0].lerp(w[1], t));
            return out;
        }
        remaining -= seg;
        out.push(w[1]);
    }
    out
}

/// Shortest distance from `pos` to any segment of the polyline
pub fn distance_to_polyline(points: &[Pos2], pos: Pos2) -> f32 {
    match points {
        [] => f32::INFINITY,
        [single] => single.distance(pos),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(w[0], w[1], pos))
            .fold(f32::INFINITY, f32::min),
    }
}

fn distance_to_segment(a: Pos2, b: Pos2, p: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return a.distance(p);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(p)
}
