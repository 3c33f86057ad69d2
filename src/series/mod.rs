// Lap series processing
// Walks ordered lap sequences and lap-number slices of the field, combining
// reference resolution and delta classification into the views a dashboard
// renders

pub mod enrich;
pub mod field;
pub mod summary;

pub use enrich::{EnrichedLapRecord, driver_laps, enrich_laps};
pub use field::{FieldLapRow, FieldLapView, compare_field};
pub use summary::{BestLapSectors, DriverRaceSummary, SummaryOptions, summarize_driver};
