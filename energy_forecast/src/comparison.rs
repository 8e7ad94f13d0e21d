//! Scoring forecasts against observed consumption

use crate::data::{MonthlySeries, Region};
use crate::datasets;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use crate::pipeline::RegionForecast;
use chrono::NaiveDate;
use forecast_math::{mean_relative_error, relative_error};
use serde::Serialize;
use tracing::debug;

/// Month-by-month comparison of a forecast with what was observed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub name: String,
    pub months: Vec<NaiveDate>,
    pub forecast: Vec<f64>,
    pub actual: Vec<f64>,
    /// `|forecast - actual| / |actual|` per month
    pub relative_errors: Vec<f64>,
    pub mean_relative_error: f64,
}

impl Comparison {
    /// Month with the largest relative error
    pub fn worst_month(&self) -> Option<(NaiveDate, f64)> {
        self.months
            .iter()
            .copied()
            .zip(self.relative_errors.iter().copied())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Compare `forecast` with the observed series covering the same months
pub fn compare(name: &str, forecast: &ForecastResult, actual: &MonthlySeries) -> Result<Comparison> {
    if forecast.len() != actual.len() {
        return Err(ForecastError::ValidationError(format!(
            "Forecast for {} has {} values but {} observations were given",
            name,
            forecast.len(),
            actual.len()
        )));
    }

    let months = actual.months()?;
    if let Some(stamps) = forecast.timestamps() {
        if stamps != months.as_slice() {
            return Err(ForecastError::ValidationError(format!(
                "Forecast months for {} do not line up with the observations starting {}",
                name,
                actual.start()
            )));
        }
    }

    let relative_errors = relative_error(forecast.values(), actual.values())?;
    let mean_relative_error = mean_relative_error(forecast.values(), actual.values())?;
    debug!(series = name, mean_relative_error, "compared forecast");

    Ok(Comparison {
        name: name.to_string(),
        months,
        forecast: forecast.values().to_vec(),
        actual: actual.values().to_vec(),
        relative_errors,
        mean_relative_error,
    })
}

/// Compare regional forecasts with the observed 2024 consumption
pub fn compare_with_observed_2024(forecasts: &[RegionForecast]) -> Result<Vec<Comparison>> {
    forecasts
        .iter()
        .map(|f| -> Result<Comparison> {
            let region: Region = f.name.parse()?;
            let observed = datasets::observed_2024(region)?;
            compare(&f.name, &f.forecast, &observed)
        })
        .collect()
}

/// Train on all but the last `holdout` months and score the forecast of them
pub fn evaluate_holdout<M: ForecastModel>(
    model: &M,
    series: &MonthlySeries,
    holdout: usize,
) -> Result<Comparison> {
    if holdout == 0 || holdout >= series.len() {
        return Err(ForecastError::ValidationError(format!(
            "Holdout of {} months must be between 1 and {}",
            holdout,
            series.len().saturating_sub(1)
        )));
    }

    let (train, test) = series.split_at(series.len() - holdout)?;
    let forecast = model.train(&train)?.forecast(holdout)?;

    compare(series.name(), &forecast, &test)
}
