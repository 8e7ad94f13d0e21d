//! Multiplicative Holt-Winters (triple exponential smoothing)
//!
//! ```text
//! Level:    L_t = α (x_t / S_{t-m}) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_t = γ (x_t / L_t) + (1 - γ) S_{t-m}
//! Fitted:   F_t = (L_{t-1} + T_{t-1}) S_{t-m}
//! Forecast: F_{n+i} = (L_n + (i + 1) T_n) S_{n-m+i}
//! ```
//!
//! Initialization uses the first cycle for the level and seasonal factors.
//! The initial trend is the difference between the sums of the first two
//! cycles divided by `m²`, which damps the estimate. With only one cycle the
//! slope across that cycle, `(x_{m-1} - x_0) / (m - 1)`, is used instead.

use crate::seasonal::SeasonalFactors;
use crate::{checked_div, MathError, Result};

/// Smoothing constants for level, trend and seasonality
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParams {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl SmoothingParams {
    /// Create validated smoothing constants, each in (0, 1)
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        for (name, value) in [("Alpha", alpha), ("Beta", beta), ("Gamma", gamma)] {
            if !value.is_finite() || value <= 0.0 || value >= 1.0 {
                return Err(MathError::InvalidInput(format!(
                    "{} must be between 0 and 1 (exclusive), got {}",
                    name, value
                )));
            }
        }

        Ok(Self { alpha, beta, gamma })
    }

    /// Create smoothing constants without range checks.
    ///
    /// Values outside (0, 1) are applied to the recurrences as given.
    pub fn unchecked(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

/// Multiplicative Holt-Winters smoother for a fixed seasonal period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWinters {
    period: usize,
    params: SmoothingParams,
}

/// State left after smoothing a series
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersFit {
    level: f64,
    trend: f64,
    seasonal: SeasonalFactors,
    /// One-step-ahead values for observations `[period, n)`
    fitted: Vec<f64>,
    observations: usize,
}

impl HoltWinters {
    /// Create a smoother for cycles of `period` observations
    pub fn new(period: usize, params: SmoothingParams) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Seasonal period must be at least 1".to_string(),
            ));
        }

        Ok(Self { period, params })
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn params(&self) -> SmoothingParams {
        self.params
    }

    /// Smooth `series` and return the final level, trend and seasonal state
    pub fn fit(&self, series: &[f64]) -> Result<HoltWintersFit> {
        let m = self.period;
        let n = series.len();

        if n < m {
            return Err(MathError::InsufficientData(format!(
                "Series has {} observations, at least one seasonal cycle of {} is required",
                n, m
            )));
        }
        if let Some(t) = series.iter().position(|x| !x.is_finite()) {
            return Err(MathError::DegenerateInput(format!(
                "Observation {} is not a finite number",
                t
            )));
        }

        let SmoothingParams { alpha, beta, gamma } = self.params;

        let first_cycle_sum: f64 = series[..m].iter().sum();
        let mut level = first_cycle_sum / m as f64;
        let mut trend = initial_trend(series, m, first_cycle_sum)?;

        let seed = series[..m]
            .iter()
            .map(|&x| checked_div(x, level, "initial seasonal factors"))
            .collect::<Result<Vec<f64>>>()?;
        let mut seasonal = SeasonalFactors::from_cycle(seed)?;

        let mut fitted = Vec::with_capacity(n - m);

        for (t, &observed) in series.iter().enumerate().skip(m) {
            let prior_seasonal = seasonal.get(t - m).ok_or_else(|| {
                MathError::InvalidInput(format!("Seasonal factor {} is no longer stored", t - m))
            })?;

            let new_level = alpha * checked_div(observed, prior_seasonal, "level")?
                + (1.0 - alpha) * (level + trend);
            let new_trend = beta * (new_level - level) + (1.0 - beta) * trend;
            let new_seasonal = gamma * checked_div(observed, new_level, "seasonal factor")?
                + (1.0 - gamma) * prior_seasonal;

            seasonal.push(new_seasonal);
            fitted.push((level + trend) * prior_seasonal);

            level = new_level;
            trend = new_trend;
        }

        Ok(HoltWintersFit {
            level,
            trend,
            seasonal,
            fitted,
            observations: n,
        })
    }
}

fn initial_trend(series: &[f64], m: usize, first_cycle_sum: f64) -> Result<f64> {
    if series.len() >= 2 * m {
        let second_cycle_sum: f64 = series[m..2 * m].iter().sum();
        return Ok((second_cycle_sum - first_cycle_sum) / (m * m) as f64);
    }

    checked_div(
        series[m - 1] - series[0],
        (m - 1) as f64,
        "single-cycle initial trend",
    )
}

impl HoltWintersFit {
    /// Level after the last observation
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Trend after the last observation
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// In-sample one-step-ahead values aligned to observations `[period, n)`
    pub fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    pub fn period(&self) -> usize {
        self.seasonal.period()
    }

    /// Number of observations that were smoothed
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Seasonal factors of the last completed cycle, oldest first
    pub fn seasonal_factors(&self) -> Vec<f64> {
        self.seasonal.latest_cycle()
    }

    /// Extrapolate `horizon` steps beyond the last observation.
    ///
    /// Level and trend stay frozen; each step takes the latest factor of its
    /// phase, so horizons longer than one cycle repeat the last cycle.
    pub fn forecast(&self, horizon: usize) -> Vec<f64> {
        let base = self.observations - self.period();

        (0..horizon)
            .map(|i| {
                (self.level + (i + 1) as f64 * self.trend) * self.seasonal.latest_of_phase(base + i)
            })
            .collect()
    }
}

/// Smooth `series` and forecast `horizon` steps ahead.
///
/// Returns `(forecast, fitted)` where `fitted` holds the one-step-ahead
/// values for observations `[period, series.len())`. The smoothing constants
/// are used as given; see [`SmoothingParams::new`] for range validation.
pub fn fit_and_forecast(
    series: &[f64],
    period: usize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    horizon: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let model = HoltWinters::new(period, SmoothingParams::unchecked(alpha, beta, gamma))?;
    let fit = model.fit(series)?;
    let forecast = fit.forecast(horizon);

    Ok((forecast, fit.fitted))
}
