use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    errors::LapsightError,
    metrics::{Delta, Metric, MetricValues, Polarity, compute_delta, resolve_all},
    records::LapRecord,
};

/// A lap plus its deltas to the driver's best and to the previous lap
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EnrichedLapRecord {
    #[serde(flatten)]
    pub lap: LapRecord,
    /// Delta to the best value of the sequence, positive means worse
    pub delta: MetricValues<Delta>,
    /// Improvement over the previous lap, positive means faster.
    /// `None` on the first lap of the sequence.
    pub previous_lap_delta: MetricValues<Option<f64>>,
}

/// Select one driver's laps of a race, ordered by lap number.
///
/// Repeated lap numbers keep the first row seen.
pub fn driver_laps(records: &[LapRecord], race_id: &str, driver_id: &str) -> Vec<LapRecord> {
    let mut laps: Vec<LapRecord> = records
        .iter()
        .filter(|lap| lap.race_id == race_id && lap.driver_id == driver_id)
        .sorted_by_key(|lap| lap.lap_number)
        .cloned()
        .collect();

    let before = laps.len();
    laps.dedup_by_key(|lap| lap.lap_number);
    if laps.len() != before {
        debug!(
            "Dropped {} duplicate lap rows for driver {} in race {}",
            before - laps.len(),
            driver_id,
            race_id
        );
    }
    laps
}

/// Enrich one driver's laps of one race.
///
/// `laps` must belong to a single race and driver and be strictly ascending
/// by lap number; anything else is rejected instead of producing deltas
/// across unrelated sequences.
pub fn enrich_laps(laps: &[LapRecord]) -> Result<Vec<EnrichedLapRecord>, LapsightError> {
    check_sequence(laps)?;

    let references = resolve_all(laps);

    let enriched = laps
        .iter()
        .enumerate()
        .map(|(index, lap)| {
            let previous = index.checked_sub(1).map(|i| &laps[i]);
            EnrichedLapRecord {
                lap: lap.clone(),
                delta: MetricValues::from_fn(|metric| {
                    let reference = references.get(metric).as_ref().map(|r| r.value);
                    compute_delta(metric.value(lap), reference, metric.polarity())
                }),
                previous_lap_delta: MetricValues::from_fn(|metric| {
                    previous.and_then(|previous| improvement(metric, previous, lap))
                }),
            }
        })
        .collect();

    Ok(enriched)
}

/// Positive when `current` beat `previous`, whatever the metric's polarity
fn improvement(metric: Metric, previous: &LapRecord, current: &LapRecord) -> Option<f64> {
    let previous = metric.value(previous)?;
    let current = metric.value(current)?;
    match metric.polarity() {
        Polarity::Min => Some(previous - current),
        Polarity::Max => Some(current - previous),
    }
}

fn check_sequence(laps: &[LapRecord]) -> Result<(), LapsightError> {
    let Some(first) = laps.first() else {
        return Ok(());
    };

    for (previous, current) in laps.iter().tuple_windows() {
        if current.race_id != first.race_id || current.driver_id != first.driver_id {
            warn!(
                "Lap sequence mixes driver {} in race {} with driver {} in race {}",
                first.driver_id, first.race_id, current.driver_id, current.race_id
            );
            return Err(LapsightError::InconsistentLapSequence {
                reason: format!(
                    "lap {} belongs to driver {} in race {}, expected driver {} in race {}",
                    current.lap_number,
                    current.driver_id,
                    current.race_id,
                    first.driver_id,
                    first.race_id
                ),
            });
        }
        if current.lap_number <= previous.lap_number {
            warn!(
                "Lap sequence for driver {} is not ascending at lap {}",
                first.driver_id, current.lap_number
            );
            return Err(LapsightError::InconsistentLapSequence {
                reason: format!(
                    "lap {} follows lap {}, laps must be strictly ascending",
                    current.lap_number, previous.lap_number
                ),
            });
        }
    }
    Ok(())
}
