// Time codec
// Converts the textual lap, sector and gap representations found in timing
// sheets into canonical seconds, and back into display strings

mod format;
mod parse;

pub use format::{format_delta, format_optional_seconds, format_seconds, NOT_AVAILABLE};
pub use parse::{parse_duration, parse_gap_interval, parse_gap_seconds};

/// Values that carry no time at all: blanks, the timing sheet's `-`
/// placeholder, and gaps expressed in laps ("1 Lap", "3 laps").
pub(crate) fn is_untimed(text: &str) -> bool {
    text.is_empty() || text == "-" || text.to_lowercase().contains("lap")
}
