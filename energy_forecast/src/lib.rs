//! # Energy Forecast
//!
//! Monthly regional energy consumption forecasting with the multiplicative
//! Holt-Winters method.
//!
//! ## Features
//!
//! - Monthly consumption series with calendar months (`chrono`)
//! - Wide CSV tables, one column per region, and built-in 2021-2023 tables
//! - One Holt-Winters model shared by every region
//! - Comparison of forecasts with observed values (relative errors)
//! - Text reports and chart-ready CSV output
//!
//! ## Quick Start
//!
//! ```rust
//! use energy_forecast::data::Region;
//! use energy_forecast::datasets;
//! use energy_forecast::models::holt_winters::HoltWintersModel;
//! use energy_forecast::models::{ForecastModel, TrainedForecastModel};
//! use forecast_math::SmoothingParams;
//!
//! let history = datasets::historical(Region::Norte)?;
//! let model = HoltWintersModel::new(12, SmoothingParams::new(0.3, 0.1, 0.2)?)?;
//!
//! let forecast = model.train(&history)?.forecast(12)?;
//! assert_eq!(forecast.horizons(), 12);
//! # Ok::<(), energy_forecast::ForecastError>(())
//! ```

pub mod comparison;
pub mod config;
pub mod data;
pub mod datasets;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use crate::comparison::Comparison;
pub use crate::config::ForecastConfig;
pub use crate::data::{ConsumptionData, DataLoader, MonthlySeries, Region};
pub use crate::error::ForecastError;
pub use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
pub use crate::pipeline::RegionForecast;
