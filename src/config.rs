// Analysis settings
// Tempo, duration and genre inputs loaded from JSON and validated before analysis

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::genres::{get_genre_rules, get_ideal_bpm_for_genres};
use crate::hit::DEFAULT_DURATION_SECONDS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inputs shared by every analyzer in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisSettings {
    /// Song tempo; resolved from `genres` when absent
    pub bpm: Option<f64>,

    /// Estimated song length, used to place the viral moment
    pub duration_seconds: f64,

    /// Selected genres, most important first
    pub genres: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            bpm: None,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            genres: Vec::new(),
        }
    }
}

impl AnalysisSettings {
    /// Parse and validate settings from JSON text
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loading analysis settings from {}", path.display());
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(bpm) = self.bpm {
            if !bpm.is_finite() || bpm <= 0.0 {
                log::warn!("Rejected settings with bpm {}", bpm);
                return Err(ConfigError::InvalidSettings(format!(
                    "bpm must be a positive number, got {}",
                    bpm
                )));
            }
        }

        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            log::warn!("Rejected settings with duration {}", self.duration_seconds);
            return Err(ConfigError::InvalidSettings(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration_seconds
            )));
        }

        for genre in &self.genres {
            if get_genre_rules(genre).is_none() {
                log::warn!("Unknown genre '{}' is ignored for tempo", genre);
            }
        }

        Ok(())
    }

    /// Explicit tempo, or the mean ideal tempo of the selected genres
    pub fn resolved_bpm(&self) -> f64 {
        match self.bpm {
            Some(bpm) => bpm,
            None => get_ideal_bpm_for_genres(&self.genres) as f64,
        }
    }
}
