//! One forecast per region from a single shared model

use crate::config::ForecastConfig;
use crate::data::{ConsumptionData, DataLoader, MonthlySeries, Region};
use crate::datasets;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use serde::Serialize;
use tracing::{info, warn};

/// Forecast of one series together with the data it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionForecast {
    pub name: String,
    pub history: MonthlySeries,
    pub forecast: ForecastResult,
    /// One-step-ahead values for the history after its first cycle
    pub fitted: ForecastResult,
}

/// Train `model` on `series` and forecast `horizon` months
pub fn forecast_series<M: ForecastModel>(
    model: &M,
    series: &MonthlySeries,
    horizon: usize,
) -> Result<RegionForecast> {
    let trained = model.train(series)?;

    Ok(RegionForecast {
        name: series.name().to_string(),
        history: series.clone(),
        forecast: trained.forecast(horizon)?,
        fitted: trained.fitted()?,
    })
}

/// Forecast each of `regions` from `data`
pub fn forecast_regions<M: ForecastModel>(
    model: &M,
    data: &ConsumptionData,
    regions: &[Region],
    horizon: usize,
) -> Result<Vec<RegionForecast>> {
    regions
        .iter()
        .map(|&region| -> Result<RegionForecast> {
            let series = data.region(region).ok_or_else(|| {
                ForecastError::DataError(format!("No series for region {}", region))
            })?;
            forecast_series(model, series, horizon)
        })
        .collect()
}

/// Data named by the configuration: its CSV input or the built-in history
pub fn load_data(config: &ForecastConfig) -> Result<ConsumptionData> {
    let data = match &config.input {
        Some(path) => {
            info!(path = %path.display(), "loading consumption table");
            DataLoader::from_csv(path)?
        }
        None => datasets::historical_dataset()?,
    };

    for name in data.names() {
        if name.parse::<Region>().is_err() {
            warn!(column = name, "ignoring series that does not name a region");
        }
    }

    Ok(data)
}

/// Run the forecast described by `config`
pub fn run(config: &ForecastConfig) -> Result<Vec<RegionForecast>> {
    config.validate()?;
    let model = config.model()?;
    let data = load_data(config)?;

    info!(
        model = model.name(),
        regions = config.regions.len(),
        horizon = config.horizon,
        "forecasting"
    );

    forecast_regions(&model, &data, &config.regions, config.horizon)
}
