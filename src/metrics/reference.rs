use serde::{Deserialize, Serialize};

use crate::records::LapRecord;

use super::{Metric, MetricValues, Polarity};

/// Best value of a metric within a scope, and the lap that set it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetricReference {
    pub value: f64,
    pub owner_driver_id: String,
    pub owner_lap_number: u32,
}

/// The set of laps a reference is resolved over
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "scope")]
pub enum ReferenceScope {
    /// One driver's own best across their laps of a race
    ThisDriverThisRace { race_id: String, driver_id: String },
    /// Best across the field on a single lap number
    AllDriversThisLap { race_id: String, lap_number: u32 },
    /// Best across every lap of every driver in a race
    AllDriversThisRace { race_id: String },
}

impl ReferenceScope {
    pub fn contains(&self, lap: &LapRecord) -> bool {
        match self {
            ReferenceScope::ThisDriverThisRace { race_id, driver_id } => {
                lap.race_id == *race_id && lap.driver_id == *driver_id
            }
            ReferenceScope::AllDriversThisLap {
                race_id,
                lap_number,
            } => lap.race_id == *race_id && lap.lap_number == *lap_number,
            ReferenceScope::AllDriversThisRace { race_id } => lap.race_id == *race_id,
        }
    }
}

/// Resolve the best value produced by `metric` over `records`.
///
/// Missing and NaN values are never chosen. Ties keep the record met first
/// in iteration order. Returns `None` when no record has a value.
pub fn resolve_best<'a, I, F>(records: I, metric: F, polarity: Polarity) -> Option<MetricReference>
where
    I: IntoIterator<Item = &'a LapRecord>,
    F: Fn(&LapRecord) -> Option<f64>,
{
    let mut best: Option<(f64, &LapRecord)> = None;
    for record in records {
        let Some(value) = metric(record).filter(|v| !v.is_nan()) else {
            continue;
        };
        match best {
            Some((incumbent, _)) if !polarity.is_better(value, incumbent) => {}
            _ => best = Some((value, record)),
        }
    }

    best.map(|(value, owner)| MetricReference {
        value,
        owner_driver_id: owner.driver_id.clone(),
        owner_lap_number: owner.lap_number,
    })
}

pub fn resolve_metric<'a, I>(records: I, metric: Metric) -> Option<MetricReference>
where
    I: IntoIterator<Item = &'a LapRecord>,
{
    resolve_best(records, |lap| metric.value(lap), metric.polarity())
}

pub fn resolve_in_scope(
    records: &[LapRecord],
    scope: &ReferenceScope,
    metric: Metric,
) -> Option<MetricReference> {
    resolve_metric(records.iter().filter(|lap| scope.contains(lap)), metric)
}

/// One reference per tracked metric, each resolved in its own pass
pub fn resolve_all(records: &[LapRecord]) -> MetricValues<Option<MetricReference>> {
    MetricValues::from_fn(|metric| resolve_metric(records, metric))
}
