// Weather summaries
// Collapses a race's station readings into the averages and rain state shown
// next to every lap view

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    metrics::{Polarity, extremum, finite_samples, mean, round_to_decimals},
    records::WeatherSample,
};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RainStatus {
    NoRain,
    ConstantRain,
    IntermittentRain,
}

impl RainStatus {
    /// Classify by how many of `total` samples reported rain
    pub fn from_flags(raining: usize, total: usize) -> Self {
        if raining == 0 {
            RainStatus::NoRain
        } else if raining == total {
            RainStatus::ConstantRain
        } else {
            RainStatus::IntermittentRain
        }
    }
}

impl Display for RainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RainStatus::NoRain => "No Rain",
            RainStatus::ConstantRain => "Constant Rain",
            RainStatus::IntermittentRain => "Intermittent Rain",
        };
        write!(f, "{}", label)
    }
}

/// A temperature extreme and the time of the reading that produced it
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimedReading {
    pub value: f64,
    pub time_utc_seconds: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub sample_count: usize,
    pub avg_air_temp: Option<f64>,
    pub avg_track_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub avg_pressure: Option<f64>,
    pub avg_wind_speed: Option<f64>,
    pub min_track_temp: Option<TimedReading>,
    pub max_track_temp: Option<TimedReading>,
    pub rain_status: RainStatus,
}

impl WeatherSummary {
    /// Copy with every average rounded to one decimal, for display
    pub fn rounded(&self) -> Self {
        let round = |value: Option<f64>| value.map(|v| round_to_decimals(v, 1));
        Self {
            avg_air_temp: round(self.avg_air_temp),
            avg_track_temp: round(self.avg_track_temp),
            avg_humidity: round(self.avg_humidity),
            avg_pressure: round(self.avg_pressure),
            avg_wind_speed: round(self.avg_wind_speed),
            ..self.clone()
        }
    }
}

/// Summarize a race's weather samples. `None` when there are no samples.
///
/// Each average skips samples missing that reading. Wind direction is a
/// bearing and is not averaged.
pub fn summarize_weather(samples: &[WeatherSample]) -> Option<WeatherSummary> {
    if samples.is_empty() {
        return None;
    }

    let average = |field: fn(&WeatherSample) -> Option<f64>| {
        mean(&finite_samples(samples.iter().map(field)))
    };

    let raining = samples.iter().filter(|sample| sample.is_raining()).count();

    Some(WeatherSummary {
        sample_count: samples.len(),
        avg_air_temp: average(|s| s.air_temp),
        avg_track_temp: average(|s| s.track_temp),
        avg_humidity: average(|s| s.humidity),
        avg_pressure: average(|s| s.pressure),
        avg_wind_speed: average(|s| s.wind_speed),
        min_track_temp: track_temp_extreme(samples, Polarity::Min),
        max_track_temp: track_temp_extreme(samples, Polarity::Max),
        rain_status: RainStatus::from_flags(raining, samples.len()),
    })
}

fn track_temp_extreme(samples: &[WeatherSample], polarity: Polarity) -> Option<TimedReading> {
    let readings: Vec<&WeatherSample> = samples
        .iter()
        .filter(|sample| sample.track_temp.is_some_and(f64::is_finite))
        .collect();
    let temps: Vec<f64> = readings.iter().filter_map(|sample| sample.track_temp).collect();

    extremum(&temps, polarity).map(|extreme| TimedReading {
        value: extreme.value,
        time_utc_seconds: readings[extreme.index].time_utc_seconds,
    })
}
