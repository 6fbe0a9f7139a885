//! Label formatting shared by all charts and panels

/// Whole-number percentage of a [0,1] metric, e.g. `0.716 -> "72%"`
pub fn percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{}%", (value * 100.0).round() as i64)
}

/// Share of a total with one decimal, e.g. `"12.5%"`
pub fn share(count: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count / total * 100.0)
}

/// Stream counts in millions with one decimal, e.g. `"123.4M"`
pub fn millions(value: u64) -> String {
    format!("{:.1}M", value as f64 / 1_000_000.0)
}

/// Axis label for counts: integers without decimals, otherwise trimmed
pub fn count_tick(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Axis label for a decade marker, e.g. `"1930s"`
pub fn decade_tick(value: f64) -> String {
    format!("{}s", value.round() as i64)
}
