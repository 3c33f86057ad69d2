use std::sync::LazyLock;

use regex::Regex;

use super::is_untimed;

/// Gap-to-leader layout used by the results sheets, e.g. `1'23.456`
static GAP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)'(\d+\.\d+)").expect("gap pattern must compile"));

/// Parse a duration string into seconds.
///
/// Layouts are tried by colon count: `H:MM:SS.fff`, then `M:SS.fff`, then a
/// bare `SS.fff`. Blanks, `-` and lap-count gaps yield `None`, as does any
/// text that does not fit a layout.
pub fn parse_duration(text: &str) -> Option<f64> {
    let text = text.trim();
    if is_untimed(text) {
        return None;
    }

    let parts: Vec<&str> = text.split(':').collect();
    let seconds = match parts.as_slice() {
        [hours, minutes, seconds] => {
            parse_whole(hours)? * 3600.
                + parse_whole(minutes)? * 60.
                + parse_unsigned_fraction(seconds)?
        }
        [minutes, seconds] => parse_whole(minutes)? * 60. + parse_unsigned_fraction(seconds)?,
        [seconds] => parse_fraction(seconds)?,
        _ => return None,
    };

    seconds.is_finite().then_some(seconds)
}

/// Normalize a gap-to-leader value.
///
/// `M'SS.fff` becomes `00:MM:SS.fff`; any other timed value is passed
/// through untouched so that plain `+0.234` style gaps survive.
pub fn parse_gap_interval(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if is_untimed(trimmed) {
        return None;
    }

    if let Some(captures) = GAP_PATTERN.captures(trimmed) {
        let minutes = captures[1].parse::<u64>().ok();
        let seconds = captures[2].parse::<f64>().ok();
        if let (Some(minutes), Some(seconds)) = (minutes, seconds) {
            return Some(format!("00:{:02}:{:06.3}", minutes, seconds));
        }
    }

    Some(text.to_string())
}

/// Gap-to-leader in seconds, going through [`parse_gap_interval`] first
pub fn parse_gap_seconds(text: &str) -> Option<f64> {
    parse_gap_interval(text).and_then(|gap| parse_duration(&gap))
}

fn parse_whole(text: &str) -> Option<f64> {
    text.trim().parse::<u32>().ok().map(f64::from)
}

// Seconds inside a colon layout carry no sign of their own
fn parse_unsigned_fraction(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.starts_with(['+', '-']) {
        return None;
    }
    parse_fraction(text)
}

fn parse_fraction(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
