// JSON-lines loaders for exported dashboard rows

use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::{
    LapsightError,
    records::{LapRecord, LapRow, RaceResult, TelemetrySample, WeatherSample},
};

/// Load every row of a JSON-lines export
pub fn load_rows<T: DeserializeOwned>(source_file: &Path) -> Result<Vec<T>, LapsightError> {
    if !source_file.exists() {
        return Err(LapsightError::InputFileMissing {
            path: format!("{:?}", source_file),
        });
    }

    let rows = serde_jsonlines::json_lines(source_file)
        .map_err(|e| LapsightError::InputLoadError { source: e })?
        .collect::<Result<Vec<T>, std::io::Error>>()
        .map_err(|e| LapsightError::InputLoadError { source: e })?;

    info!("Loaded {} rows from {:?}", rows.len(), source_file);
    Ok(rows)
}

/// Load lap rows and normalize them into records
pub fn load_laps(source_file: &Path) -> Result<Vec<LapRecord>, LapsightError> {
    Ok(load_rows::<LapRow>(source_file)?
        .into_iter()
        .map(LapRecord::from)
        .collect())
}

pub fn load_weather(source_file: &Path) -> Result<Vec<WeatherSample>, LapsightError> {
    let mut samples = load_rows::<WeatherSample>(source_file)?;
    samples.sort_by_key(|sample| sample.time_utc_seconds);
    Ok(samples)
}

pub fn load_telemetry(source_file: &Path) -> Result<Vec<TelemetrySample>, LapsightError> {
    load_rows(source_file)
}

pub fn load_results(source_file: &Path) -> Result<Vec<RaceResult>, LapsightError> {
    load_rows(source_file)
}
