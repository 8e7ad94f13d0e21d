//! Text reports and chart-ready CSV output
//!
//! Reports only format numbers; nothing here changes a forecast value.

use crate::comparison::Comparison;
use crate::error::Result;
use crate::models::ForecastResult;
use crate::pipeline::RegionForecast;
use chrono::{Datelike, NaiveDate};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Portuguese month label, e.g. `Janeiro de 2024`
pub fn month_label(month: NaiveDate) -> String {
    format!("{} de {}", MONTH_NAMES[month.month0() as usize], month.year())
}

fn step_label(month: Option<NaiveDate>, index: usize) -> String {
    match month {
        Some(m) => month_label(m),
        None => format!("Step {}", index + 1),
    }
}

fn labelled(result: &ForecastResult) -> impl Iterator<Item = (String, f64)> + '_ {
    result.values().iter().enumerate().map(move |(i, &value)| {
        let month = result.timestamps().and_then(|t| t.get(i).copied());
        (step_label(month, i), value)
    })
}

/// One line per forecast month, values with one decimal
pub fn render_forecast(forecast: &RegionForecast) -> String {
    let mut out = format!("Forecast for region {}\n", forecast.name);
    for (label, value) in labelled(&forecast.forecast) {
        let _ = writeln!(out, "{}: {:.1}", label, value);
    }
    out
}

/// Relative error per month followed by the mean
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = format!("Relative errors for region {}\n", comparison.name);
    for (i, month) in comparison.months.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: forecast {:.1}, actual {:.1}, error {:.2}%",
            month_label(*month),
            comparison.forecast[i],
            comparison.actual[i],
            comparison.relative_errors[i] * 100.0
        );
    }
    let _ = writeln!(
        out,
        "Mean relative error: {:.2}%",
        comparison.mean_relative_error * 100.0
    );
    out
}

/// Write `month,series,value` rows for charting history, fit and forecast.
///
/// The forecast rows start with the last historical point so that a line
/// drawn through them joins the historical line.
pub fn write_plot_csv<W: Write>(writer: W, forecast: &RegionForecast) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["month", "series", "value"])?;

    let history = &forecast.history;
    for (month, value) in history.months()?.into_iter().zip(history.values()) {
        csv_writer.write_record([month.to_string(), "historical".to_string(), value.to_string()])?;
    }

    if let Some(months) = forecast.fitted.timestamps() {
        for (month, value) in months.iter().zip(forecast.fitted.values()) {
            csv_writer.write_record([month.to_string(), "fitted".to_string(), value.to_string()])?;
        }
    }

    if let Some(months) = forecast.forecast.timestamps() {
        match history.values().last() {
            Some(last) if !months.is_empty() => {
                csv_writer.write_record([
                    history.end()?.to_string(),
                    "forecast".to_string(),
                    last.to_string(),
                ])?;
            }
            _ => {}
        }
        for (month, value) in months.iter().zip(forecast.forecast.values()) {
            csv_writer.write_record([month.to_string(), "forecast".to_string(), value.to_string()])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// File name used for a series' chart data
pub fn plot_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.csv", stem)
}

/// Write one chart CSV per forecast into `dir`, returning the paths written
pub fn write_plot_files<P: AsRef<Path>>(dir: P, forecasts: &[RegionForecast]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&dir)?;

    forecasts
        .iter()
        .map(|f| -> Result<PathBuf> {
            let path = dir.as_ref().join(plot_file_name(&f.name));
            write_plot_csv(File::create(&path)?, f)?;
            Ok(path)
        })
        .collect()
}
