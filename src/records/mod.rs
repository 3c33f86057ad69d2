// Data model for the rows the dashboard reads from its backing store
// Raw rows deserialize straight from the store's column names and are
// normalized into immutable records before any metric is derived

pub mod lap;
pub mod race_result;
pub mod telemetry;
pub mod weather;

pub use lap::{FinishFlag, LapRecord, LapRow};
pub use race_result::{RaceResult, order_by_position};
pub use telemetry::TelemetrySample;
pub use weather::WeatherSample;
