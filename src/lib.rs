//! # Energy Forecast Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`forecast_math`]: multiplicative Holt-Winters and forecast accuracy
//! - [`energy_forecast`]: regional monthly consumption, reports and the CLI
//!
//! ## Example
//!
//! ```
//! use energy_forecast_workspace::fit_and_forecast;
//!
//! let series = [5.0, 7.0, 9.0, 11.0];
//! let (forecast, fitted) = fit_and_forecast(&series, 4, 0.5, 0.5, 0.5, 3).unwrap();
//! assert_eq!(forecast, vec![6.25, 10.5, 15.75]);
//! assert!(fitted.is_empty());
//! ```

pub use energy_forecast;
pub use forecast_math;

pub use energy_forecast::{ForecastConfig, ForecastError, MonthlySeries, Region};
pub use forecast_math::{fit_and_forecast, relative_error, MathError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_reexports() {
        assert_eq!(relative_error(&[100.0], &[80.0]).unwrap(), vec![0.25]);
        assert_eq!(ForecastConfig::default().regions.len(), Region::ALL.len());
    }
}
