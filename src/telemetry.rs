// Telemetry channel summaries
// Reduces the readings of one channel over one lap to the min, max and
// average shown in the lap deep dive

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    metrics::{Polarity, extremum, mean},
    records::TelemetrySample,
};

/// A channel extreme and the timestamp of the reading that produced it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimedSample {
    pub value: f64,
    pub timestamp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChannelSummary {
    pub name: String,
    pub lap_number: u32,
    /// Readings with a finite value
    pub sample_count: usize,
    pub average: Option<f64>,
    pub min: Option<TimedSample>,
    pub max: Option<TimedSample>,
}

/// Summarize one channel of one driver's lap. `None` when the lap has no
/// finite reading for that channel.
pub fn summarize_channel(
    samples: &[TelemetrySample],
    race_id: &str,
    driver_id: &str,
    lap_number: u32,
    name: &str,
) -> Option<ChannelSummary> {
    let readings: Vec<&TelemetrySample> = samples
        .iter()
        .filter(|sample| sample.belongs_to(race_id, driver_id, lap_number) && sample.name == name)
        .collect();
    summarize_readings(name, lap_number, &readings)
}

/// Summarize every channel recorded for one driver's lap, ordered by channel name
pub fn summarize_lap_channels(
    samples: &[TelemetrySample],
    race_id: &str,
    driver_id: &str,
    lap_number: u32,
) -> Vec<ChannelSummary> {
    let mut channels: BTreeMap<&str, Vec<&TelemetrySample>> = BTreeMap::new();
    for sample in samples
        .iter()
        .filter(|sample| sample.belongs_to(race_id, driver_id, lap_number))
    {
        channels.entry(sample.name.as_str()).or_default().push(sample);
    }

    channels
        .into_iter()
        .filter_map(|(name, readings)| summarize_readings(name, lap_number, &readings))
        .collect()
}

fn summarize_readings(
    name: &str,
    lap_number: u32,
    readings: &[&TelemetrySample],
) -> Option<ChannelSummary> {
    let finite: Vec<&TelemetrySample> = readings
        .iter()
        .copied()
        .filter(|sample| sample.value.is_some_and(f64::is_finite))
        .collect();
    if finite.len() < readings.len() {
        debug!(
            "Skipped {} unusable readings of channel {} on lap {}",
            readings.len() - finite.len(),
            name,
            lap_number
        );
    }
    if finite.is_empty() {
        return None;
    }

    let values: Vec<f64> = finite.iter().filter_map(|sample| sample.value).collect();
    let timed = |polarity: Polarity| {
        extremum(&values, polarity).map(|extreme| TimedSample {
            value: extreme.value,
            timestamp: finite[extreme.index].timestamp.clone(),
        })
    };

    Some(ChannelSummary {
        name: name.to_string(),
        lap_number,
        sample_count: values.len(),
        average: mean(&values),
        min: timed(Polarity::Min),
        max: timed(Polarity::Max),
    })
}
