use serde::{Deserialize, Serialize};

use crate::{
    metrics::{Delta, MetricReference, MetricValues, ReferenceScope, compute_delta, resolve_metric},
    records::LapRecord,
};

/// One driver's lap in a best-in-field comparison
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldLapRow {
    #[serde(flatten)]
    pub lap: LapRecord,
    /// Delta to the best of the field on this lap, positive means worse
    pub delta_to_best: MetricValues<Delta>,
}

/// Every driver's timing on one lap number, against the field's best
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FieldLapView {
    pub race_id: String,
    pub lap_number: u32,
    pub references: MetricValues<Option<MetricReference>>,
    pub rows: Vec<FieldLapRow>,
}

/// Compare all drivers on `lap_number` of `race_id`.
///
/// One reference is resolved per metric over the whole field, then every
/// driver is measured against that shared reference. Rows keep input order.
pub fn compare_field(records: &[LapRecord], race_id: &str, lap_number: u32) -> FieldLapView {
    let scope = ReferenceScope::AllDriversThisLap {
        race_id: race_id.to_string(),
        lap_number,
    };
    let field: Vec<&LapRecord> = records.iter().filter(|lap| scope.contains(lap)).collect();

    let references = MetricValues::from_fn(|metric| resolve_metric(field.iter().copied(), metric));

    let rows = field
        .iter()
        .map(|lap| FieldLapRow {
            lap: (*lap).clone(),
            delta_to_best: references.map(|metric, reference| {
                compute_delta(
                    metric.value(lap),
                    reference.as_ref().map(|r| r.value),
                    metric.polarity(),
                )
            }),
        })
        .collect();

    FieldLapView {
        race_id: race_id.to_string(),
        lap_number,
        references,
        rows,
    }
}
