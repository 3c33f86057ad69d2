use serde::{Deserialize, Serialize};

use crate::{
    metrics::{
        MetricReference, MetricValues, finite_samples, mean, median, population_std_dev,
        resolve_all,
    },
    records::LapRecord,
};

const DEFAULT_OUTLIER_SIGMA: f64 = 2.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryOptions {
    /// Only laps run under green that did not end in the pit lane count
    /// towards the average, spread and outlier threshold
    pub clean_laps_only: bool,
    /// Laps slower than median + `outlier_sigma` standard deviations are outliers
    pub outlier_sigma: f64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            clean_laps_only: false,
            outlier_sigma: DEFAULT_OUTLIER_SIGMA,
        }
    }
}

/// Sectors of the lap that set the driver's best lap time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BestLapSectors {
    pub lap_number: u32,
    pub lap_time: f64,
    pub sector1: Option<f64>,
    pub sector2: Option<f64>,
    pub sector3: Option<f64>,
}

/// Headline figures for one driver's race
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DriverRaceSummary {
    pub lap_count: usize,
    /// Best value and owning lap per metric, over every lap
    pub bests: MetricValues<Option<MetricReference>>,
    pub best_lap: Option<BestLapSectors>,
    pub average_lap_time: Option<f64>,
    pub median_lap_time: Option<f64>,
    /// Population standard deviation of lap times, a consistency measure
    pub lap_time_std_dev: Option<f64>,
    /// Lap numbers whose time is far slower than the driver's usual pace
    pub outlier_laps: Vec<u32>,
}

/// Summarize one driver's laps of a race
pub fn summarize_driver(laps: &[LapRecord], options: &SummaryOptions) -> DriverRaceSummary {
    let bests = resolve_all(laps);

    let best_lap = bests.lap_time.as_ref().and_then(|best| {
        laps.iter()
            .find(|lap| lap.lap_number == best.owner_lap_number && lap.driver_id == best.owner_driver_id)
            .map(|lap| BestLapSectors {
                lap_number: lap.lap_number,
                lap_time: best.value,
                sector1: lap.sector1,
                sector2: lap.sector2,
                sector3: lap.sector3,
            })
    });

    let lap_times = finite_samples(
        laps.iter()
            .filter(|lap| !options.clean_laps_only || lap.is_clean())
            .map(|lap| lap.lap_time),
    );
    let average_lap_time = mean(&lap_times);
    let median_lap_time = median(&lap_times);
    let lap_time_std_dev = population_std_dev(&lap_times);

    let outlier_laps = match (median_lap_time, lap_time_std_dev) {
        (Some(center), Some(std_dev)) => {
            let threshold = center + std_dev * options.outlier_sigma;
            laps.iter()
                .filter(|lap| lap.lap_time.is_some_and(|time| time > threshold))
                .map(|lap| lap.lap_number)
                .collect()
        }
        _ => Vec::new(),
    };

    DriverRaceSummary {
        lap_count: laps.len(),
        bests,
        best_lap,
        average_lap_time,
        median_lap_time,
        lap_time_std_dev,
        outlier_laps,
    }
}
