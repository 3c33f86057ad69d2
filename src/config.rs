use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{LapsightError, series::SummaryOptions};

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub pretty_output: bool,
    pub outlier_sigma: f64,
    pub clean_laps_only: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pretty_output: true,
            outlier_sigma: SummaryOptions::default().outlier_sigma,
            clean_laps_only: false,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("lapsight").join(CONFIG_FILE_NAME))
    }

    /// Load the config from the user's config directory, if one was saved
    pub fn from_local_file() -> Result<Option<Self>, LapsightError> {
        match Self::default_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(None),
        }
    }

    pub fn from_file(path: &Path) -> Result<Option<Self>, LapsightError> {
        if !path.exists() {
            return Ok(None);
        }
        let file =
            std::fs::File::open(path).map_err(|e| LapsightError::ConfigIOError { source: e })?;
        serde_json::from_reader(file)
            .map(Some)
            .map_err(|e| LapsightError::ConfigSerializeError { source: e })
    }

    pub fn save(&self) -> Result<(), LapsightError> {
        let config_path = Self::default_path().ok_or(LapsightError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), LapsightError> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| LapsightError::ConfigIOError { source: e })?;
        }

        let file =
            std::fs::File::create(path).map_err(|e| LapsightError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| LapsightError::ConfigSerializeError { source: e })
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            clean_laps_only: self.clean_laps_only,
            outlier_sigma: self.outlier_sigma,
        }
    }
}
