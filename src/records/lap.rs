use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::timing::parse_duration;

/// Flag displayed when the car crossed the finish line
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum FinishFlag {
    Green,
    FullCourseYellow,
    Red,
    Checkered,
    Other(String),
    #[default]
    Unknown,
}

impl FinishFlag {
    pub fn is_green(&self) -> bool {
        matches!(self, FinishFlag::Green)
    }
}

impl From<&str> for FinishFlag {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "" => FinishFlag::Unknown,
            "GF" => FinishFlag::Green,
            "FCY" => FinishFlag::FullCourseYellow,
            "RF" => FinishFlag::Red,
            "FF" => FinishFlag::Checkered,
            _ => FinishFlag::Other(value.trim().to_string()),
        }
    }
}

impl From<String> for FinishFlag {
    fn from(value: String) -> Self {
        FinishFlag::from(value.as_str())
    }
}

impl From<FinishFlag> for String {
    fn from(value: FinishFlag) -> Self {
        value.to_string()
    }
}

impl Display for FinishFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinishFlag::Green => write!(f, "GF"),
            FinishFlag::FullCourseYellow => write!(f, "FCY"),
            FinishFlag::Red => write!(f, "RF"),
            FinishFlag::Checkered => write!(f, "FF"),
            FinishFlag::Other(flag) => write!(f, "{}", flag),
            FinishFlag::Unknown => Ok(()),
        }
    }
}

/// Lap row as stored, before time normalization
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LapRow {
    pub race_id: String,
    pub driver_id: String,
    pub lap_number: u32,
    pub lap_time: Option<String>,
    pub s1: Option<String>,
    pub s2: Option<String>,
    pub s3: Option<String>,
    pub kph: Option<f64>,
    pub top_speed: Option<f64>,
    #[serde(default)]
    pub crossing_finish_line_in_pit: bool,
    pub flag_at_fl: Option<String>,
    pub s1_seconds: Option<f64>,
    pub s2_seconds: Option<f64>,
    pub s3_seconds: Option<f64>,
}

/// One driver's timing for one lap of one race
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LapRecord {
    pub race_id: String,
    pub driver_id: String,
    /// 1-based, unique per race and driver
    pub lap_number: u32,
    /// Seconds
    pub lap_time: Option<f64>,
    /// Seconds
    pub sector1: Option<f64>,
    /// Seconds
    pub sector2: Option<f64>,
    /// Seconds
    pub sector3: Option<f64>,
    /// Average speed over the lap, kph
    pub average_speed: Option<f64>,
    /// Speed trap, kph
    pub top_speed: Option<f64>,
    pub crossed_finish_in_pit: bool,
    pub flag_at_finish: FinishFlag,
}

impl LapRecord {
    /// Normalize a stored row. Pre-parsed sector seconds win over the
    /// textual sector when both are present.
    pub fn from_row(row: &LapRow) -> Self {
        Self {
            race_id: row.race_id.clone(),
            driver_id: row.driver_id.clone(),
            lap_number: row.lap_number,
            lap_time: row.lap_time.as_deref().and_then(parse_duration),
            sector1: sector_seconds(row.s1_seconds, row.s1.as_deref()),
            sector2: sector_seconds(row.s2_seconds, row.s2.as_deref()),
            sector3: sector_seconds(row.s3_seconds, row.s3.as_deref()),
            average_speed: row.kph.filter(|kph| kph.is_finite()),
            top_speed: row.top_speed.filter(|speed| speed.is_finite()),
            crossed_finish_in_pit: row.crossing_finish_line_in_pit,
            flag_at_finish: row
                .flag_at_fl
                .as_deref()
                .map(FinishFlag::from)
                .unwrap_or_default(),
        }
    }

    /// Sum of the three sectors when all of them are known
    pub fn sector_sum(&self) -> Option<f64> {
        Some(self.sector1? + self.sector2? + self.sector3?)
    }

    /// A lap run entirely under green that did not end in the pit lane
    pub fn is_clean(&self) -> bool {
        !self.crossed_finish_in_pit && self.flag_at_finish.is_green()
    }
}

impl From<LapRow> for LapRecord {
    fn from(row: LapRow) -> Self {
        LapRecord::from_row(&row)
    }
}

fn sector_seconds(preparsed: Option<f64>, text: Option<&str>) -> Option<f64> {
    preparsed
        .filter(|seconds| seconds.is_finite())
        .or_else(|| text.and_then(parse_duration))
}
