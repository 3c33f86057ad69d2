use serde::{Deserialize, Serialize};

/// One reading of a named telemetry channel taken during a lap
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySample {
    pub race_id: String,
    pub driver_id: String,
    pub lap_number: u32,
    /// ISO-8601 time of the reading as stored
    #[serde(default)]
    pub timestamp: String,
    /// Channel name, e.g. `speed` or `aps`
    pub name: String,
    /// Unparseable readings are stored as null
    pub value: Option<f64>,
}

impl TelemetrySample {
    pub fn belongs_to(&self, race_id: &str, driver_id: &str, lap_number: u32) -> bool {
        self.race_id == race_id && self.driver_id == driver_id && self.lap_number == lap_number
    }
}
