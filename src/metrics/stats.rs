use serde::{Deserialize, Serialize};

use super::Polarity;

/// Extreme value of a sample sequence and where it occurred
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}

/// Drop missing and non-finite values
pub fn finite_samples<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|value| value.is_finite())
        .collect()
}

/// Arithmetic mean, `None` for an empty input
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let sum: f64 = samples.iter().sum();
    Some(sum / samples.len() as f64).filter(|mean| mean.is_finite())
}

/// Standard deviation dividing by N, not N - 1
pub fn population_std_dev(samples: &[f64]) -> Option<f64> {
    let mean = mean(samples)?;
    let sum_of_squares: f64 = samples.iter().map(|sample| (sample - mean).powi(2)).sum();
    Some((sum_of_squares / samples.len() as f64).sqrt()).filter(|std_dev| std_dev.is_finite())
}

/// Smallest or largest sample; the first occurrence wins ties and NaN is skipped
pub fn extremum(samples: &[f64], polarity: Polarity) -> Option<Extremum> {
    let mut best: Option<Extremum> = None;
    for (index, value) in samples.iter().copied().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some(incumbent) if !polarity.is_better(value, incumbent.value) => {}
            _ => best = Some(Extremum { value, index }),
        }
    }
    best
}

pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

pub fn round_to_decimals(number: f64, decimals: i32) -> f64 {
    let multiplier = 10.0_f64.powi(decimals);
    (number * multiplier).round() / multiplier
}
