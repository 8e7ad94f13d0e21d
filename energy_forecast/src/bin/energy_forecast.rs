//! Command-line interface for regional energy consumption forecasts.

use clap::{Args, Parser, Subcommand};
use energy_forecast::comparison::{compare_with_observed_2024, evaluate_holdout};
use energy_forecast::pipeline::{self, RegionForecast};
use energy_forecast::report::{render_comparison, render_forecast, write_plot_files};
use energy_forecast::{ForecastConfig, ForecastError, Region};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "energy_forecast")]
#[command(about = "Holt-Winters forecasts of monthly regional energy consumption", long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    /// Log more detail (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunArgs {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV table with a month column and one column per region
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Region to forecast (repeatable; default: all)
    #[arg(short, long, global = true)]
    region: Vec<Region>,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast the months following the historical data
    Forecast {
        /// Number of months to forecast
        #[arg(long)]
        horizon: Option<usize>,

        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Directory for chart-ready CSV files
        #[arg(long)]
        plot_dir: Option<PathBuf>,
    },

    /// Compare the forecast of 2024 with the observed 2024 consumption
    Compare {
        /// Print results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Hold back the last months of each series and score their forecast
    Backtest {
        /// Number of months to hold back
        #[arg(long, default_value = "12")]
        holdout: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "energy_forecast=warn",
        1 => "energy_forecast=info",
        2 => "energy_forecast=debug",
        _ => "energy_forecast=trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

fn load_config(args: &RunArgs) -> Result<ForecastConfig, ForecastError> {
    let mut config = match &args.config {
        Some(path) => ForecastConfig::from_json_file(path)?,
        None => ForecastConfig::default(),
    };

    if args.input.is_some() {
        config.input = args.input.clone();
    }
    if !args.region.is_empty() {
        config.regions = args.region.clone();
    }

    Ok(config)
}

fn print_forecasts(forecasts: &[RegionForecast], json: bool) -> Result<(), ForecastError> {
    if json {
        println!("{}", serde_json::to_string_pretty(forecasts)?);
    } else {
        for forecast in forecasts {
            println!("{}", render_forecast(forecast));
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), ForecastError> {
    let mut config = load_config(&cli.run)?;

    match cli.command {
        Commands::Forecast {
            horizon,
            json,
            plot_dir,
        } => {
            if let Some(h) = horizon {
                config.horizon = h;
            }
            let forecasts = pipeline::run(&config)?;
            print_forecasts(&forecasts, json)?;

            if let Some(dir) = plot_dir {
                for path in write_plot_files(&dir, &forecasts)? {
                    info!(path = %path.display(), "wrote chart data");
                }
            }
        }
        Commands::Compare { json } => {
            // The observed tables cover exactly the year after the built-in history
            config.horizon = 12;
            let forecasts = pipeline::run(&config)?;
            let comparisons = compare_with_observed_2024(&forecasts)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&comparisons)?);
            } else {
                for comparison in &comparisons {
                    println!("{}", render_comparison(comparison));
                }
            }
        }
        Commands::Backtest { holdout } => {
            config.validate()?;
            let model = config.model()?;
            let data = pipeline::load_data(&config)?;

            for &region in &config.regions {
                let series = data.region(region).ok_or_else(|| {
                    ForecastError::DataError(format!("No series for region {}", region))
                })?;
                let comparison = evaluate_holdout(&model, series, holdout)?;
                println!("{}", render_comparison(&comparison));
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
