//! # Forecast Math
//!
//! Numerical core for seasonal forecasting.
//! This crate provides the multiplicative Holt-Winters method and the
//! accuracy calculations used to compare forecasts with observed values.
//!
//! ```
//! use forecast_math::holt_winters::fit_and_forecast;
//!
//! let cycle = [100.0, 110.0, 120.0, 130.0];
//! let series: Vec<f64> = cycle.iter().chain(cycle.iter()).copied().collect();
//!
//! let (forecast, fitted) = fit_and_forecast(&series, 4, 0.3, 0.1, 0.2, 4).unwrap();
//! assert_eq!(forecast.len(), 4);
//! assert_eq!(fitted.len(), 4);
//! ```

use thiserror::Error;

pub mod accuracy;
pub mod holt_winters;
pub mod seasonal;

pub use accuracy::{mean_absolute_error, mean_relative_error, relative_error, relative_error_value};
pub use holt_winters::{fit_and_forecast, HoltWinters, HoltWintersFit, SmoothingParams};
pub use seasonal::SeasonalFactors;

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Divide, failing on a zero divisor instead of producing `inf` or `NaN`.
pub(crate) fn checked_div(numerator: f64, denominator: f64, what: &str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(MathError::DegenerateInput(format!(
            "division by zero while computing {}",
            what
        )));
    }
    Ok(numerator / denominator)
}
