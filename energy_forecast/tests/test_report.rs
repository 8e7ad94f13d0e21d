use chrono::NaiveDate;
use energy_forecast::comparison::compare;
use energy_forecast::data::{MonthlySeries, Region};
use energy_forecast::datasets;
use energy_forecast::models::holt_winters::HoltWintersModel;
use energy_forecast::models::ForecastResult;
use energy_forecast::pipeline::{forecast_series, RegionForecast};
use energy_forecast::report::{
    month_label, plot_file_name, render_comparison, render_forecast, write_plot_csv, write_plot_files,
};
use forecast_math::SmoothingParams;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

fn small_forecast() -> RegionForecast {
    let model = HoltWintersModel::new(2, SmoothingParams::new(0.5, 0.5, 0.5).unwrap()).unwrap();
    let history = MonthlySeries::new("Sul", month(2023, 11), vec![10.0, 20.0, 10.0, 20.0]).unwrap();
    forecast_series(&model, &history, 2).unwrap()
}

#[test]
fn test_render_forecast_norte() {
    let model = HoltWintersModel::new(12, SmoothingParams::new(0.3, 0.1, 0.2).unwrap()).unwrap();
    let history = datasets::historical(Region::Norte).unwrap();
    let forecast = forecast_series(&model, &history, 12).unwrap();

    let text = render_forecast(&forecast);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Forecast for region Norte");
    assert_eq!(lines[1], "Janeiro de 2024: 1069388.3");
    assert_eq!(lines[12], "Dezembro de 2024: 1337454.9");
}

#[test]
fn test_month_labels_in_portuguese() {
    assert_eq!(month_label(month(2024, 3)), "Março de 2024");
    assert_eq!(month_label(month(2023, 12)), "Dezembro de 2023");
}

#[test]
fn test_render_comparison() {
    let forecast = ForecastResult::new(vec![100.0, 80.0], 2).unwrap();
    let actual = MonthlySeries::new("Sul", month(2024, 1), vec![80.0, 100.0]).unwrap();
    let comparison = compare("Sul", &forecast, &actual).unwrap();

    let text = render_comparison(&comparison);
    assert_eq!(
        text,
        "Relative errors for region Sul\n\
         Janeiro de 2024: forecast 100.0, actual 80.0, error 25.00%\n\
         Fevereiro de 2024: forecast 80.0, actual 100.0, error 20.00%\n\
         Mean relative error: 22.50%\n"
    );
}

#[test]
fn test_plot_csv_joins_history_and_forecast() {
    let forecast = small_forecast();
    let mut buffer = Vec::new();
    write_plot_csv(&mut buffer, &forecast).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "month,series,value");
    assert_eq!(lines[1], "2023-11-01,historical,10");
    assert_eq!(lines[4], "2024-02-01,historical,20");
    assert_eq!(lines[5], "2024-01-01,fitted,10");
    assert_eq!(lines[7], "2024-02-01,forecast,20");
    assert!(lines[8].starts_with("2024-03-01,forecast,"));
    assert!(lines[9].starts_with("2024-04-01,forecast,"));
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_write_plot_files() {
    let dir = tempdir().unwrap();
    let mut forecast = small_forecast();
    forecast.name = "Centro-Oeste".to_string();

    let paths = write_plot_files(dir.path().join("charts"), &[forecast]).unwrap();

    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("charts/centro_oeste.csv"));
    assert!(paths[0].exists());
}

#[test]
fn test_plot_file_name() {
    assert_eq!(plot_file_name("Norte"), "norte.csv");
    assert_eq!(plot_file_name("Centro-Oeste"), "centro_oeste.csv");
}
