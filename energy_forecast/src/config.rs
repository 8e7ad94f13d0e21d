//! Forecast run configuration
//!
//! A configuration is read from JSON; missing fields take the defaults
//! below, which reproduce the yearly regional forecast:
//!
//! ```json
//! {
//!   "seasonal_period": 12,
//!   "horizon": 12,
//!   "alpha": 0.3,
//!   "beta": 0.1,
//!   "gamma": 0.2,
//!   "regions": ["norte", "nordeste", "sudeste", "sul", "centro-oeste"]
//! }
//! ```

use crate::data::Region;
use crate::error::{ForecastError, Result};
use crate::models::holt_winters::HoltWintersModel;
use forecast_math::SmoothingParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters of a forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Observations per seasonal cycle
    pub seasonal_period: usize,
    /// Number of months to forecast
    pub horizon: usize,
    /// Level smoothing constant
    pub alpha: f64,
    /// Trend smoothing constant
    pub beta: f64,
    /// Seasonal smoothing constant
    pub gamma: f64,
    /// Regions to forecast
    pub regions: Vec<Region>,
    /// CSV table to read instead of the built-in data
    pub input: Option<PathBuf>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            seasonal_period: 12,
            horizon: 12,
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.2,
            regions: Region::ALL.to_vec(),
            input: None,
        }
    }
}

impl ForecastConfig {
    /// Read and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: ForecastConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field eagerly so bad values fail before any smoothing
    pub fn validate(&self) -> Result<()> {
        if self.seasonal_period == 0 {
            return Err(ForecastError::ValidationError(
                "Seasonal period must be at least 1".to_string(),
            ));
        }
        if self.regions.is_empty() {
            return Err(ForecastError::ValidationError(
                "At least one region must be selected".to_string(),
            ));
        }
        self.smoothing()?;
        Ok(())
    }

    /// Validated smoothing constants
    pub fn smoothing(&self) -> Result<SmoothingParams> {
        Ok(SmoothingParams::new(self.alpha, self.beta, self.gamma)?)
    }

    /// Holt-Winters model described by this configuration
    pub fn model(&self) -> Result<HoltWintersModel> {
        HoltWintersModel::new(self.seasonal_period, self.smoothing()?)
    }
}
