// Library interface for lapsight
// Pure lap and weather metrics; the binary is a thin consumer of this crate

pub mod config;
pub mod errors;
pub mod input;
pub mod metrics;
pub mod records;
pub mod refresh;
pub mod series;
pub mod telemetry;
pub mod timing;
pub mod weather;

// Re-export commonly used types
pub use errors::LapsightError;
pub use metrics::{Delta, DeltaClassification, Metric, MetricReference, MetricValues, Polarity};
pub use records::{LapRecord, LapRow, RaceResult, TelemetrySample, WeatherSample};
pub use series::{DriverRaceSummary, EnrichedLapRecord, FieldLapView, compare_field, enrich_laps, summarize_driver};
pub use telemetry::{ChannelSummary, summarize_channel, summarize_lap_channels};
pub use weather::{RainStatus, WeatherSummary, summarize_weather};
