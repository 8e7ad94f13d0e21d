use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use energy_forecast::comparison::{compare, compare_with_observed_2024, evaluate_holdout};
use energy_forecast::data::{MonthlySeries, Region};
use energy_forecast::datasets;
use energy_forecast::models::holt_winters::HoltWintersModel;
use energy_forecast::models::ForecastResult;
use energy_forecast::pipeline::{forecast_regions, forecast_series};
use energy_forecast::ForecastError;
use forecast_math::SmoothingParams;

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn default_model() -> HoltWintersModel {
    HoltWintersModel::new(12, SmoothingParams::new(0.3, 0.1, 0.2).unwrap()).unwrap()
}

#[test]
fn test_compare_relative_errors() {
    let forecast = ForecastResult::new(vec![100.0, 80.0], 2).unwrap();
    let actual = MonthlySeries::new("Sul", month(2024, 1), vec![80.0, 100.0]).unwrap();

    let comparison = compare("Sul", &forecast, &actual).unwrap();

    assert_eq!(comparison.relative_errors, vec![0.25, 0.2]);
    assert_approx_eq!(comparison.mean_relative_error, 0.225);
    assert_eq!(comparison.months, vec![month(2024, 1), month(2024, 2)]);
    assert_eq!(comparison.worst_month(), Some((month(2024, 1), 0.25)));
}

#[test]
fn test_compare_rejects_misaligned_months() {
    let forecast =
        ForecastResult::new_with_timestamps(vec![1.0, 2.0], vec![month(2024, 2), month(2024, 3)])
            .unwrap();
    let actual = MonthlySeries::new("Sul", month(2024, 1), vec![1.0, 2.0]).unwrap();

    let result = compare("Sul", &forecast, &actual);
    assert!(matches!(result, Err(ForecastError::ValidationError(_))));
}

#[test]
fn test_compare_rejects_length_mismatch() {
    let forecast = ForecastResult::new(vec![1.0, 2.0, 3.0], 3).unwrap();
    let actual = MonthlySeries::new("Sul", month(2024, 1), vec![1.0, 2.0]).unwrap();

    assert!(compare("Sul", &forecast, &actual).is_err());
}

#[test]
fn test_norte_2024_comparison() {
    let history = datasets::historical(Region::Norte).unwrap();
    let forecast = forecast_series(&default_model(), &history, 12).unwrap();

    let comparisons = compare_with_observed_2024(&[forecast]).unwrap();
    let norte = &comparisons[0];

    assert_eq!(norte.name, "Norte");
    assert_eq!(norte.relative_errors.len(), 12);
    assert_approx_eq!(norte.relative_errors[0], 0.047475945342492665, 1e-9);
    assert_approx_eq!(norte.mean_relative_error, 0.04686985255756015, 1e-9);
    assert_eq!(norte.worst_month().unwrap().0, month(2024, 12));
}

#[test]
fn test_all_regions_within_eleven_percent_in_2024() {
    let data = datasets::historical_dataset().unwrap();
    let forecasts = forecast_regions(&default_model(), &data, &Region::ALL, 12).unwrap();
    let comparisons = compare_with_observed_2024(&forecasts).unwrap();

    assert_eq!(comparisons.len(), 5);
    for comparison in &comparisons {
        assert!(
            comparison.mean_relative_error < 0.11,
            "{}: {}",
            comparison.name,
            comparison.mean_relative_error
        );
    }
}

#[test]
fn test_observed_comparison_needs_a_region_name() {
    let series = MonthlySeries::new("Brasil", month(2021, 1), vec![1.0; 24]).unwrap();
    let forecast = forecast_series(&default_model(), &series, 12).unwrap();

    assert!(compare_with_observed_2024(&[forecast]).is_err());
}

#[test]
fn test_evaluate_holdout() {
    let history = datasets::historical(Region::Norte).unwrap();
    let comparison = evaluate_holdout(&default_model(), &history, 12).unwrap();

    assert_eq!(comparison.months[0], month(2023, 1));
    assert_eq!(comparison.actual, history.values()[24..].to_vec());
    assert_approx_eq!(comparison.mean_relative_error, 0.0876688819267281, 1e-9);
}

#[test]
fn test_evaluate_holdout_bounds() {
    let history = datasets::historical(Region::Sul).unwrap();

    assert!(evaluate_holdout(&default_model(), &history, 0).is_err());
    assert!(evaluate_holdout(&default_model(), &history, 36).is_err());

    // Leaves less than one cycle to train on
    let result = evaluate_holdout(&default_model(), &history, 30);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}
