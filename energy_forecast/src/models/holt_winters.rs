//! Multiplicative Holt-Winters model for monthly series

use crate::data::{add_months, MonthlySeries};
use crate::error::Result;
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use chrono::NaiveDate;
use forecast_math::{HoltWinters, HoltWintersFit, SmoothingParams};
use tracing::debug;

/// Holt-Winters model with fixed smoothing constants
#[derive(Debug, Clone)]
pub struct HoltWintersModel {
    /// Name of the model
    name: String,
    smoother: HoltWinters,
}

/// Holt-Winters state after smoothing one series
#[derive(Debug, Clone)]
pub struct TrainedHoltWinters {
    /// Name of the model
    name: String,
    fit: HoltWintersFit,
    /// Month of the first fitted value
    first_fitted_month: NaiveDate,
    /// Month following the last observation
    next_month: NaiveDate,
}

impl HoltWintersModel {
    /// Create a new Holt-Winters model
    pub fn new(seasonal_period: usize, params: SmoothingParams) -> Result<Self> {
        let smoother = HoltWinters::new(seasonal_period, params)?;

        Ok(Self {
            name: format!(
                "Holt-Winters multiplicative (L={}, alpha={}, beta={}, gamma={})",
                seasonal_period,
                params.alpha(),
                params.beta(),
                params.gamma()
            ),
            smoother,
        })
    }

    pub fn seasonal_period(&self) -> usize {
        self.smoother.period()
    }

    pub fn params(&self) -> SmoothingParams {
        self.smoother.params()
    }
}

impl ForecastModel for HoltWintersModel {
    type Trained = TrainedHoltWinters;

    fn train(&self, data: &MonthlySeries) -> Result<Self::Trained> {
        debug!(
            series = data.name(),
            observations = data.len(),
            period = self.smoother.period(),
            "smoothing series"
        );

        let fit = self.smoother.fit(data.values())?;

        debug!(
            series = data.name(),
            level = fit.level(),
            trend = fit.trend(),
            "smoothing finished"
        );

        Ok(TrainedHoltWinters {
            name: self.name.clone(),
            first_fitted_month: data.month_at(self.smoother.period())?,
            next_month: data.month_at(data.len())?,
            fit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedHoltWinters {
    /// Smoothing state behind the forecasts
    pub fn state(&self) -> &HoltWintersFit {
        &self.fit
    }
}

impl TrainedForecastModel for TrainedHoltWinters {
    fn forecast(&self, horizons: usize) -> Result<ForecastResult> {
        let values = self.fit.forecast(horizons);
        let months = (0..horizons)
            .map(|i| add_months(self.next_month, i))
            .collect::<Result<Vec<_>>>()?;

        ForecastResult::new_with_timestamps(values, months)
    }

    fn fitted(&self) -> Result<ForecastResult> {
        let values = self.fit.fitted().to_vec();
        let months = (0..values.len())
            .map(|i| add_months(self.first_fitted_month, i))
            .collect::<Result<Vec<_>>>()?;

        ForecastResult::new_with_timestamps(values, months)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
