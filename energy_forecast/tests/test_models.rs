use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use energy_forecast::data::{MonthlySeries, Region};
use energy_forecast::datasets;
use energy_forecast::models::holt_winters::HoltWintersModel;
use energy_forecast::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use energy_forecast::ForecastError;
use forecast_math::SmoothingParams;
use rstest::rstest;

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn default_model() -> HoltWintersModel {
    HoltWintersModel::new(12, SmoothingParams::new(0.3, 0.1, 0.2).unwrap()).unwrap()
}

// 2024 forecasts published with one decimal for the default parameters
#[rstest]
#[case(Region::Norte, [1069388.3, 1031545.9, 1075318.2, 1131808.8, 1144029.0, 1204200.7, 1180011.1, 1269998.2, 1361242.5, 1367395.9, 1349540.0, 1337454.9])]
#[case(Region::Nordeste, [3083885.1, 2967321.9, 3113896.8, 3129456.3, 2979999.3, 2935837.5, 2863863.2, 2884281.0, 3108189.6, 3150614.7, 3212035.2, 3356302.6])]
#[case(Region::Sudeste, [7420691.5, 7327921.2, 7616157.5, 7688974.7, 6727686.6, 6737067.5, 6653632.6, 6791339.2, 7367159.7, 7321142.5, 7345522.7, 7772643.2])]
#[case(Region::Sul, [2623238.7, 2539907.6, 2589700.2, 2441885.5, 2195666.6, 2222666.7, 2317078.9, 2335851.4, 2230822.8, 2290128.2, 2359093.9, 2563802.4])]
#[case(Region::CentroOeste, [1441386.1, 1381128.2, 1465712.7, 1524695.5, 1400404.8, 1443036.4, 1338900.3, 1384140.9, 1668205.9, 1736662.8, 1639614.6, 1720732.0])]
fn test_regional_forecast_2024(#[case] region: Region, #[case] expected: [f64; 12]) {
    let history = datasets::historical(region).unwrap();
    let forecast = default_model().train(&history).unwrap().forecast(12).unwrap();

    assert_eq!(forecast.horizons(), 12);
    for (value, expected) in forecast.values().iter().zip(expected.iter()) {
        assert_approx_eq!(*value, *expected, 0.051);
    }
}

#[test]
fn test_forecast_is_labelled_with_following_months() {
    let history = datasets::historical(Region::Sul).unwrap();
    let forecast = default_model().train(&history).unwrap().forecast(14).unwrap();

    let months = forecast.timestamps().unwrap();
    assert_eq!(months.len(), 14);
    assert_eq!(months[0], month(2024, 1));
    assert_eq!(months[11], month(2024, 12));
    assert_eq!(months[13], month(2025, 2));
}

#[test]
fn test_fitted_values_start_after_first_cycle() {
    let history = datasets::historical(Region::Nordeste).unwrap();
    let trained = default_model().train(&history).unwrap();
    let fitted = trained.fitted().unwrap();

    assert_eq!(fitted.len(), 24);
    assert_eq!(fitted.timestamps().unwrap()[0], month(2022, 1));
    assert_eq!(trained.state().fitted().len(), 24);

    // One-step-ahead values stay within 15% of the observations
    let errors = fitted.relative_errors(&history.values()[12..]).unwrap();
    assert!(errors.iter().all(|e| *e < 0.15));
}

#[test]
fn test_zero_horizon() {
    let history = datasets::historical(Region::Norte).unwrap();
    let trained = default_model().train(&history).unwrap();

    let forecast = trained.forecast(0).unwrap();
    assert!(forecast.is_empty());
    assert_eq!(forecast.timestamps().unwrap().len(), 0);
    assert_eq!(trained.fitted().unwrap().len(), 24);
}

#[test]
fn test_periodic_series_repeats_last_cycle() {
    let cycle: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
    let values: Vec<f64> = cycle.iter().chain(cycle.iter()).copied().collect();
    let series = MonthlySeries::new("ramp", month(2022, 1), values).unwrap();

    let forecast = default_model().train(&series).unwrap().forecast(12).unwrap();
    for (value, expected) in forecast.values().iter().zip(cycle.iter()) {
        assert_approx_eq!(*value, *expected, 1e-9 * expected);
    }
}

#[test]
fn test_short_series_is_insufficient() {
    let series = MonthlySeries::new("short", month(2023, 1), vec![1.0, 2.0, 3.0]).unwrap();
    let model = HoltWintersModel::new(5, SmoothingParams::new(0.3, 0.1, 0.2).unwrap()).unwrap();

    let result = model.train(&series);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}

#[test]
fn test_single_month_period_one_is_degenerate() {
    let series = MonthlySeries::new("one", month(2023, 1), vec![42.0]).unwrap();
    let model = HoltWintersModel::new(1, SmoothingParams::new(0.3, 0.1, 0.2).unwrap()).unwrap();

    let result = model.train(&series);
    assert!(matches!(result, Err(ForecastError::DegenerateInput(_))));
}

#[test]
fn test_model_name_and_parameters() {
    let model = default_model();

    assert!(model.name().contains("Holt-Winters"));
    assert!(model.name().contains("alpha=0.3"));
    assert_eq!(model.seasonal_period(), 12);
    assert_eq!(model.params().gamma(), 0.2);

    assert!(HoltWintersModel::new(0, model.params()).is_err());
}

#[test]
fn test_forecast_result_operations() {
    let values = vec![105.0, 106.0, 107.0];
    let forecast = ForecastResult::new(values.clone(), 3).unwrap();

    assert_eq!(forecast.horizons(), 3);
    assert_eq!(forecast.values(), &values[..]);
    assert!(forecast.timestamps().is_none());

    let json = forecast.to_json().unwrap();
    assert!(json.contains("105.0"));

    let actual = vec![106.0, 107.0, 108.0];
    assert_approx_eq!(forecast.mean_absolute_error(&actual).unwrap(), 1.0);

    assert!(ForecastResult::new(values, 2).is_err());
    assert!(ForecastResult::new_with_timestamps(vec![1.0], vec![]).is_err());
}
