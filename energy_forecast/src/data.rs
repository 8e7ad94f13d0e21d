//! Monthly consumption series and CSV loading

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Brazilian geographic regions covered by the consumption tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Norte,
    Nordeste,
    Sudeste,
    Sul,
    CentroOeste,
}

impl Region {
    /// All regions, in the order they are reported
    pub const ALL: [Region; 5] = [
        Region::Norte,
        Region::Nordeste,
        Region::Sudeste,
        Region::Sul,
        Region::CentroOeste,
    ];

    /// Display name of the region
    pub fn name(&self) -> &'static str {
        match self {
            Region::Norte => "Norte",
            Region::Nordeste => "Nordeste",
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
            Region::CentroOeste => "Centro-Oeste",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "norte" => Ok(Region::Norte),
            "nordeste" => Ok(Region::Nordeste),
            "sudeste" => Ok(Region::Sudeste),
            "sul" => Ok(Region::Sul),
            "centrooeste" => Ok(Region::CentroOeste),
            _ => Err(ForecastError::ValidationError(format!(
                "Unknown region: {}",
                s
            ))),
        }
    }
}

/// Parse a month written as `YYYY-MM` or `YYYY-MM-DD` into its first day
pub fn parse_month(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    let date = if text.len() == 7 {
        NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")?
    } else {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")?
    };

    first_of_month(date)
}

/// Move `date` forward by `months` calendar months
pub fn add_months(date: NaiveDate, months: usize) -> Result<NaiveDate> {
    u32::try_from(months)
        .ok()
        .and_then(|m| date.checked_add_months(Months::new(m)))
        .ok_or_else(|| {
            ForecastError::DataError(format!("Month {} + {} is out of range", date, months))
        })
}

fn first_of_month(date: NaiveDate) -> Result<NaiveDate> {
    date.with_day(1)
        .ok_or_else(|| ForecastError::DataError(format!("Invalid month: {}", date)))
}

/// Consumption observed once per month, starting at a given month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// Name of the series, usually a region
    name: String,
    /// First day of the first observed month
    start: NaiveDate,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Create a series of consecutive monthly observations.
    ///
    /// Values must be finite and strictly positive since they feed a
    /// multiplicative model.
    pub fn new(name: impl Into<String>, start: NaiveDate, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(ForecastError::DataError(format!(
                "Series '{}' has no observations",
                name
            )));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ForecastError::DataError(format!(
                "Series '{}' has a non-positive or non-finite value at position {}: {}",
                name, i, values[i]
            )));
        }

        Ok(Self {
            name,
            start: first_of_month(start)?,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First observed month
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Month of the observation at `index`
    pub fn month_at(&self, index: usize) -> Result<NaiveDate> {
        add_months(self.start, index)
    }

    /// Last observed month
    pub fn end(&self) -> Result<NaiveDate> {
        self.month_at(self.len().saturating_sub(1))
    }

    /// Months of all observations, in order
    pub fn months(&self) -> Result<Vec<NaiveDate>> {
        (0..self.len()).map(|i| self.month_at(i)).collect()
    }

    /// The `horizon` months following the last observation
    pub fn next_months(&self, horizon: usize) -> Result<Vec<NaiveDate>> {
        (0..horizon).map(|i| self.month_at(self.len() + i)).collect()
    }

    /// Split into observations before `index` and from `index` on
    pub fn split_at(&self, index: usize) -> Result<(MonthlySeries, MonthlySeries)> {
        if index == 0 || index >= self.len() {
            return Err(ForecastError::ValidationError(format!(
                "Split index {} must be inside the series (length {})",
                index,
                self.len()
            )));
        }

        let (head, tail) = self.values.split_at(index);
        Ok((
            MonthlySeries::new(self.name.clone(), self.start, head.to_vec())?,
            MonthlySeries::new(self.name.clone(), self.month_at(index)?, tail.to_vec())?,
        ))
    }
}

/// A set of named monthly series sharing one calendar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionData {
    series: Vec<MonthlySeries>,
}

impl ConsumptionData {
    /// Create a data set, rejecting duplicate series names
    pub fn new(series: Vec<MonthlySeries>) -> Result<Self> {
        for (i, s) in series.iter().enumerate() {
            if series[..i].iter().any(|other| other.name == s.name) {
                return Err(ForecastError::DataError(format!(
                    "Duplicate series name: {}",
                    s.name
                )));
            }
        }

        Ok(Self { series })
    }

    pub fn series(&self) -> &[MonthlySeries] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Names of all series, in column order
    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name()).collect()
    }

    /// Look up a series by exact name
    pub fn get(&self, name: &str) -> Option<&MonthlySeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Look up the series whose name denotes `region`
    pub fn region(&self, region: Region) -> Option<&MonthlySeries> {
        self.series
            .iter()
            .find(|s| s.name.parse::<Region>().ok() == Some(region))
    }
}

/// Data loader for monthly consumption tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a wide CSV file: one month column plus one column per series
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<ConsumptionData> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a wide CSV table from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<ConsumptionData> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let time_idx = Self::detect_time_column(&headers)?;
        let value_columns: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != time_idx)
            .map(|(i, name)| (i, name.to_string()))
            .collect();

        if value_columns.is_empty() {
            return Err(ForecastError::DataError(
                "No consumption columns found in data".to_string(),
            ));
        }

        let mut start: Option<NaiveDate> = None;
        let mut previous: Option<NaiveDate> = None;
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); value_columns.len()];

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let month = parse_month(record.get(time_idx).unwrap_or_default()).map_err(|e| {
                ForecastError::DataError(format!("Line {}: invalid month ({})", line, e))
            })?;

            if let Some(prev) = previous {
                if month != add_months(prev, 1)? {
                    return Err(ForecastError::DataError(format!(
                        "Line {}: expected the month after {}, found {}",
                        line, prev, month
                    )));
                }
            }
            if start.is_none() {
                start = Some(month);
            }
            previous = Some(month);

            for ((idx, name), column) in value_columns.iter().zip(columns.iter_mut()) {
                let raw = record.get(*idx).unwrap_or_default();
                let value: f64 = raw.parse().map_err(|_| {
                    ForecastError::ParseError(format!(
                        "Line {}: column '{}' has a non-numeric value '{}'",
                        line, name, raw
                    ))
                })?;
                column.push(value);
            }
        }

        let start = start.ok_or_else(|| {
            ForecastError::DataError("No observations found in data".to_string())
        })?;

        let series = value_columns
            .into_iter()
            .zip(columns)
            .map(|((_, name), values)| MonthlySeries::new(name, start, values))
            .collect::<Result<Vec<_>>>()?;

        ConsumptionData::new(series)
    }

    /// Detect the month column by its header
    fn detect_time_column(headers: &csv::StringRecord) -> Result<usize> {
        headers
            .iter()
            .position(|name| {
                let lower = name.to_lowercase();
                lower.contains("month")
                    || lower.contains("date")
                    || lower.contains("time")
                    || lower.contains("period")
            })
            .ok_or_else(|| ForecastError::DataError("No month column found in data".to_string()))
    }
}
