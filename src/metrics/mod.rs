// Derived lap metrics
// Reference resolution, delta classification and aggregate statistics shared
// by every lap view

pub mod delta;
pub mod reference;
pub mod stats;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::records::LapRecord;

pub use delta::{DELTA_EPSILON, Delta, DeltaClassification, compute_delta, compute_delta_with_epsilon};
pub use reference::{
    MetricReference, ReferenceScope, resolve_all, resolve_best, resolve_in_scope, resolve_metric,
};
pub use stats::{Extremum, extremum, finite_samples, mean, median, population_std_dev, round_to_decimals};

/// Which direction counts as better for a metric
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Lower is better, e.g. lap and sector times
    Min,
    /// Higher is better, e.g. speeds
    Max,
}

impl Polarity {
    /// Strict comparison, so an equal candidate never displaces the incumbent
    pub fn is_better(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Polarity::Min => candidate < incumbent,
            Polarity::Max => candidate > incumbent,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    LapTime,
    Sector1,
    Sector2,
    Sector3,
    AverageSpeed,
    TopSpeed,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::LapTime,
        Metric::Sector1,
        Metric::Sector2,
        Metric::Sector3,
        Metric::AverageSpeed,
        Metric::TopSpeed,
    ];

    pub fn polarity(&self) -> Polarity {
        match self {
            Metric::LapTime | Metric::Sector1 | Metric::Sector2 | Metric::Sector3 => Polarity::Min,
            Metric::AverageSpeed | Metric::TopSpeed => Polarity::Max,
        }
    }

    /// Time metrics are measured in seconds, the rest in kph
    pub fn is_time(&self) -> bool {
        self.polarity() == Polarity::Min
    }

    /// Value of this metric on a lap. NaN is treated as missing.
    pub fn value(&self, lap: &LapRecord) -> Option<f64> {
        let value = match self {
            Metric::LapTime => lap.lap_time,
            Metric::Sector1 => lap.sector1,
            Metric::Sector2 => lap.sector2,
            Metric::Sector3 => lap.sector3,
            Metric::AverageSpeed => lap.average_speed,
            Metric::TopSpeed => lap.top_speed,
        };
        value.filter(|v| !v.is_nan())
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::LapTime => "Lap Time",
            Metric::Sector1 => "S1",
            Metric::Sector2 => "S2",
            Metric::Sector3 => "S3",
            Metric::AverageSpeed => "KPH",
            Metric::TopSpeed => "Top Speed",
        };
        write!(f, "{}", name)
    }
}

/// One value per tracked metric
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricValues<T> {
    pub lap_time: T,
    pub sector1: T,
    pub sector2: T,
    pub sector3: T,
    pub average_speed: T,
    pub top_speed: T,
}

impl<T> MetricValues<T> {
    /// Build by evaluating `f` once per metric, in [`Metric::ALL`] order
    pub fn from_fn(mut f: impl FnMut(Metric) -> T) -> Self {
        Self {
            lap_time: f(Metric::LapTime),
            sector1: f(Metric::Sector1),
            sector2: f(Metric::Sector2),
            sector3: f(Metric::Sector3),
            average_speed: f(Metric::AverageSpeed),
            top_speed: f(Metric::TopSpeed),
        }
    }

    pub fn get(&self, metric: Metric) -> &T {
        match metric {
            Metric::LapTime => &self.lap_time,
            Metric::Sector1 => &self.sector1,
            Metric::Sector2 => &self.sector2,
            Metric::Sector3 => &self.sector3,
            Metric::AverageSpeed => &self.average_speed,
            Metric::TopSpeed => &self.top_speed,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Metric, &T) -> U) -> MetricValues<U> {
        MetricValues::from_fn(|metric| f(metric, self.get(metric)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &T)> {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_is_strict() {
        assert!(Polarity::Min.is_better(1.0, 2.0));
        assert!(!Polarity::Min.is_better(2.0, 2.0));
        assert!(Polarity::Max.is_better(2.0, 1.0));
        assert!(!Polarity::Max.is_better(2.0, 2.0));
    }

    #[test]
    fn test_metric_value_skips_nan() {
        let lap = LapRecord {
            lap_time: Some(f64::NAN),
            top_speed: Some(200.),
            ..LapRecord::default()
        };
        assert_eq!(Metric::LapTime.value(&lap), None);
        assert_eq!(Metric::TopSpeed.value(&lap), Some(200.));
        assert_eq!(Metric::Sector1.value(&lap), None);
    }

    #[test]
    fn test_metric_values_accessors() {
        let values = MetricValues::from_fn(|metric| metric.is_time());
        assert!(*values.get(Metric::Sector2));
        assert!(!*values.get(Metric::AverageSpeed));
        let count = values.iter().filter(|(_, is_time)| **is_time).count();
        assert_eq!(count, 4);
        let names = values.map(|metric, _| metric.to_string());
        assert_eq!(names.top_speed, "Top Speed");
    }
}
