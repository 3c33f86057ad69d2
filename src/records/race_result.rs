use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::timing::{parse_duration, parse_gap_interval, parse_gap_seconds};

/// Classification row for one driver. Not processed by the metrics engine,
/// only normalized for display.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RaceResult {
    pub race_id: String,
    pub driver_id: String,
    pub class_type: Option<String>,
    pub position: Option<u32>,
    pub position_in_class: Option<u32>,
    pub vehicle: Option<String>,
    pub laps: Option<u32>,
    pub elapsed_time: Option<String>,
    pub gap_to_first: Option<String>,
    pub gap_to_previous: Option<String>,
    pub best_lap_number: Option<u32>,
    pub best_lap_time: Option<String>,
    pub best_lap_speed_kph: Option<f64>,
}

impl RaceResult {
    /// Rewrite both gap columns into the canonical `00:MM:SS.fff` shape.
    /// Lap-count gaps and placeholders become `None`.
    pub fn with_normalized_gaps(mut self) -> Self {
        self.gap_to_first = self.gap_to_first.as_deref().and_then(parse_gap_interval);
        self.gap_to_previous = self.gap_to_previous.as_deref().and_then(parse_gap_interval);
        self
    }

    pub fn gap_to_first_seconds(&self) -> Option<f64> {
        self.gap_to_first.as_deref().and_then(parse_gap_seconds)
    }

    pub fn gap_to_previous_seconds(&self) -> Option<f64> {
        self.gap_to_previous.as_deref().and_then(parse_gap_seconds)
    }

    pub fn best_lap_seconds(&self) -> Option<f64> {
        self.best_lap_time.as_deref().and_then(parse_duration)
    }

    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.elapsed_time.as_deref().and_then(parse_duration)
    }
}

/// Order results by finishing position; unclassified entries go last and
/// keep their input order.
pub fn order_by_position(results: Vec<RaceResult>) -> Vec<RaceResult> {
    results
        .into_iter()
        .sorted_by_key(|result| (result.position.is_none(), result.position))
        .collect()
}
