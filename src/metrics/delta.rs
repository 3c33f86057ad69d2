use serde::{Deserialize, Serialize};

use super::Polarity;

/// Deltas within this band of zero are reported as matching the reference
pub const DELTA_EPSILON: f64 = 0.001;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DeltaClassification {
    Better,
    Worse,
    AtReference,
    Unavailable,
}

/// Difference to a reference, normalized so a positive value is always worse
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Delta {
    pub value: Option<f64>,
    pub classification: DeltaClassification,
}

impl Delta {
    pub const UNAVAILABLE: Delta = Delta {
        value: None,
        classification: DeltaClassification::Unavailable,
    };
}

impl Default for Delta {
    fn default() -> Self {
        Delta::UNAVAILABLE
    }
}

/// Compare `current` to `reference` with the default epsilon.
///
/// Time metrics (`Min`) yield `current - reference`, speed metrics (`Max`)
/// yield `reference - current`, so a slower lap is positive either way.
pub fn compute_delta(current: Option<f64>, reference: Option<f64>, polarity: Polarity) -> Delta {
    compute_delta_with_epsilon(current, reference, polarity, DELTA_EPSILON)
}

pub fn compute_delta_with_epsilon(
    current: Option<f64>,
    reference: Option<f64>,
    polarity: Polarity,
    epsilon: f64,
) -> Delta {
    let (Some(current), Some(reference)) = (current, reference) else {
        return Delta::UNAVAILABLE;
    };
    if current.is_nan() || reference.is_nan() {
        return Delta::UNAVAILABLE;
    }

    let value = match polarity {
        Polarity::Min => current - reference,
        Polarity::Max => reference - current,
    };
    let classification = if value < -epsilon {
        DeltaClassification::Better
    } else if value > epsilon {
        DeltaClassification::Worse
    } else {
        DeltaClassification::AtReference
    };

    Delta {
        value: Some(value),
        classification,
    }
}
