/// Placeholder shown wherever a value could not be derived
pub const NOT_AVAILABLE: &str = "N/A";

/// Format seconds as `M:SS.fff`.
///
/// Minutes are not padded, the seconds part always is (`5.2` renders as
/// `0:05.200`). The value is rounded to whole milliseconds before being
/// split so that `59.9996` renders as `1:00.000` and not `0:60.000`.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let sign = if seconds < 0. { "-" } else { "" };
    let total_ms = (seconds.abs() * 1000.).round() as u64;
    let minutes = total_ms / 60_000;
    let remainder_ms = total_ms % 60_000;

    format!(
        "{}{}:{:02}.{:03}",
        sign,
        minutes,
        remainder_ms / 1000,
        remainder_ms % 1000
    )
}

pub fn format_optional_seconds(seconds: Option<f64>) -> String {
    seconds
        .map(format_seconds)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Signed delta for tables, e.g. `+0.123s` or `-1.500s`
pub fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(delta) if delta.is_finite() => {
            // avoid rendering -0.0 as "+-0.000s"
            let delta = if delta == 0. { 0. } else { delta };
            let sign = if delta >= 0. { "+" } else { "" };
            format!("{}{:.3}s", sign, delta)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}
