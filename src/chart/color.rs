//! Colour helpers: HSL construction, d3-style rainbow, RGB interpolation and palettes

use crate::data::Genre;
use egui::Color32;

/// Colour from hue in degrees, saturation and lightness in [0,1]
pub fn hsl(h: f32, s: f32, l: f32) -> Color32 {
    let h = h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        to_u8(v * 255.0)
    };
    Color32::from_rgb(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Cubehelix rainbow, matching d3's `interpolateRainbow`
///
/// Values outside [0,1] wrap around.
pub fn rainbow(t: f64) -> Color32 {
    let t = t - t.floor();
    let ts = (t - 0.5).abs();
    let h = 360.0 * t - 100.0;
    let s = 1.5 - 1.5 * ts;
    let l = 0.8 - 0.9 * ts;
    cubehelix(h, s, l)
}

fn cubehelix(h: f64, s: f64, l: f64) -> Color32 {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let h = (h + 120.0).to_radians();
    let a = s * l * (1.0 - l);
    let (sinh, cosh) = h.sin_cos();
    let r = 255.0 * (l + a * (A * cosh + B * sinh));
    let g = 255.0 * (l + a * (C * cosh + D * sinh));
    let b = 255.0 * (l + a * (E * cosh));
    Color32::from_rgb(to_u8(r as f32), to_u8(g as f32), to_u8(b as f32))
}

/// Linear interpolation between two colours in RGB space
pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| to_u8(x as f32 + (y as f32 - x as f32) * t);
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

pub fn cyan() -> Color32 {
    hsl(193.0, 0.95, 0.58)
}

pub fn magenta() -> Color32 {
    hsl(280.0, 0.70, 0.60)
}

pub fn lime() -> Color32 {
    hsl(85.0, 0.85, 0.60)
}

pub fn orange() -> Color32 {
    hsl(25.0, 0.95, 0.60)
}

pub fn pink() -> Color32 {
    hsl(330.0, 0.80, 0.65)
}

/// Chart accent colours, in the order the dashboard assigns them
pub fn chart_palette() -> [Color32; 8] {
    [
        cyan(),
        magenta(),
        lime(),
        orange(),
        pink(),
        hsl(200.0, 0.80, 0.60),
        hsl(150.0, 0.70, 0.55),
        hsl(45.0, 0.90, 0.60),
    ]
}

/// Neutral colour for "low" buckets and missing categories
pub fn muted() -> Color32 {
    Color32::from_rgb(70, 74, 86)
}

/// Primary and secondary brand colours
pub fn primary() -> Color32 {
    hsl(263.0, 0.70, 0.62)
}

pub fn secondary() -> Color32 {
    hsl(217.0, 0.33, 0.45)
}

/// Fixed categorical colour per genre, shared by the scatter and the region grid
pub fn genre_color(genre: Genre) -> Color32 {
    match genre {
        Genre::Pop => cyan(),
        Genre::Rock => magenta(),
        Genre::HipHop => lime(),
        Genre::Electronic => orange(),
        Genre::Jazz => pink(),
        Genre::Classical => primary(),
        Genre::RnB => secondary(),
        Genre::Country => hsl(45.0, 0.90, 0.60),
    }
}
