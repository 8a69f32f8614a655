//! # glacier-cli
//!
//! Command-line interface for glacier retreat analysis.

use clap::{Args, Parser, Subcommand};
use faq::GlacierBot;
use glacier::report::{merge, write_csv};
use glacier::risk::{evaluate, RiskThresholds};
use glacier::series::{DatasetConfig, DuplicateYearPolicy, GlacierDataset, TimeSeriesStore};
use glacier::trend::{ForecastRequest, ModelSpec, TrendForecaster};
use glacier::{forecast_series, AnalysisConfig, GlacierAnalysis, SeriesForecast};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "glacier")]
#[command(about = "Glacier retreat trend forecasting CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read the dataset from.
#[derive(Args)]
struct InputArgs {
    /// Input CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Year column name (default: year)
    #[arg(long)]
    year_column: Option<String>,

    /// Area column name (default: area_km2)
    #[arg(long)]
    area_column: Option<String>,

    /// Elevation column name (default: mean_elevation_m)
    #[arg(long)]
    elevation_column: Option<String>,

    /// Keep the first row of a duplicated year instead of failing
    #[arg(long)]
    keep_first: bool,
}

impl InputArgs {
    fn dataset_config(&self, mut config: DatasetConfig) -> DatasetConfig {
        if let Some(name) = &self.year_column {
            config.year_column = name.clone();
        }
        if let Some(name) = &self.area_column {
            config.area_column = name.clone();
        }
        if let Some(name) = &self.elevation_column {
            config.elevation_column = name.clone();
        }
        if self.keep_first {
            config.duplicate_policy = DuplicateYearPolicy::KeepFirst;
        }
        config
    }

    fn load(&self, base: DatasetConfig) -> CliResult<GlacierDataset> {
        let config = self.dataset_config(base);
        let dataset = GlacierDataset::from_csv_path(&self.input, &config)
            .map_err(|e| format!("Failed to load {:?}: {}", self.input, e))?;
        println!(
            "Loaded {} observations from {:?}",
            dataset.area.len(),
            self.input.file_name().unwrap_or_default()
        );
        Ok(dataset)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show observations and headline metrics
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Forecast glacier area with one or all models
    Forecast {
        #[command(flatten)]
        input: InputArgs,

        /// Model (polynomial, loglinear, arima, all)
        #[arg(short, long, default_value = "all")]
        model: String,

        /// Polynomial degree
        #[arg(long, default_value = "2")]
        degree: usize,

        /// ARIMA order as p,d,q
        #[arg(long, default_value = "1,1,1")]
        order: String,

        /// First forecast year for regression models
        #[arg(long, default_value = "2025")]
        from: i32,

        /// Last forecast year
        #[arg(long, default_value = "2050")]
        horizon: i32,

        /// Years between regression forecasts
        #[arg(long, default_value = "5")]
        step: i32,

        /// Clamp predictions to at least this value
        #[arg(long)]
        floor: Option<f64>,

        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify the latest observation against risk thresholds
    Alert {
        #[command(flatten)]
        input: InputArgs,

        /// Area below which the glacier is critical
        #[arg(long, default_value = "20.0")]
        critical: f64,

        /// Warning band above the critical threshold
        #[arg(long, default_value = "5.0")]
        margin: f64,

        /// Raise a warning when the latest drop exceeds this amount
        #[arg(long)]
        rapid_loss: Option<f64>,
    },

    /// Run the full analysis and print the report as JSON
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Analysis config (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask GlacierBot a question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

/// Parse a `p,d,q` ARIMA order.
fn parse_order(order: &str) -> CliResult<(usize, usize, usize)> {
    let parts = order
        .split(',')
        .map(|p| p.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid ARIMA order '{}': {}", order, e))?;

    match parts.as_slice() {
        [p, d, q] => Ok((*p, *d, *q)),
        _ => Err(format!("Invalid ARIMA order '{}': expected p,d,q", order)),
    }
}

/// Resolve the `--model` flag to the specs to run.
fn parse_models(model: &str, degree: usize, order: &str) -> CliResult<Vec<ModelSpec>> {
    let (p, d, q) = parse_order(order)?;
    let polynomial = ModelSpec::polynomial(degree);
    let arima = ModelSpec::arima(p, d, q);

    match model.to_lowercase().as_str() {
        "polynomial" | "poly" => Ok(vec![polynomial]),
        "loglinear" | "log_linear" | "exp" => Ok(vec![ModelSpec::log_linear()]),
        "arima" => Ok(vec![arima]),
        "all" => Ok(vec![polynomial, ModelSpec::log_linear(), arima]),
        _ => Err(format!(
            "Unknown model: {}. Use 'polynomial', 'loglinear', 'arima' or 'all'",
            model
        )),
    }
}

/// Write text to a file, or to stdout when no file is given.
fn emit(text: &str, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| format!("Failed to write output: {}", e))?;
        println!("Results written to {:?}", path);
    } else {
        println!("{}", text);
    }
    Ok(())
}

fn print_series(name: &str, store: &TimeSeriesStore, unit: &str) -> CliResult<()> {
    let summary = store.summary().map_err(|e| e.to_string())?;

    println!("\n{} ({} points)", name, store.len());
    println!("  {:>6}  {:>12}", "Year", unit);
    for obs in store.observations() {
        println!("  {:>6}  {:>12.2}", obs.year, obs.value);
    }

    println!("  First: {} ({:.2})", summary.first.year, summary.first.value);
    println!("  Latest: {} ({:.2})", summary.latest.year, summary.latest.value);
    println!("  Range: {:.2} .. {:.2}", summary.min, summary.max);
    println!("  Total loss: {:.2}", summary.total_loss);
    println!("  Net change: {:+.2} over {} years", summary.net_change, summary.span_years());

    let report = store.load_report();
    if report.dropped > 0 || report.duplicates > 0 {
        println!(
            "  Skipped rows: {} incomplete, {} duplicate",
            report.dropped, report.duplicates
        );
    }
    Ok(())
}

/// Run summary command
fn run_summary(input: InputArgs) -> CliResult<()> {
    let dataset = input.load(DatasetConfig::default())?;

    print_series("Glacier area", &dataset.area, "sq.km")?;
    if let Some(elevation) = &dataset.elevation {
        print_series("Mean elevation", elevation, "m")?;
    }
    Ok(())
}

/// Run forecast command
#[allow(clippy::too_many_arguments)]
fn run_forecast(
    input: InputArgs,
    model: String,
    degree: usize,
    order: String,
    from: i32,
    horizon: i32,
    step: i32,
    floor: Option<f64>,
    format: String,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let models = parse_models(&model, degree, &order)?;
    let mut request = ForecastRequest::every(step, from, horizon).map_err(|e| e.to_string())?;
    if let Some(floor) = floor {
        request = request.with_floor(floor);
    }

    let dataset = input.load(DatasetConfig::default())?;
    let forecast: SeriesForecast =
        forecast_series(&TrendForecaster::new(), &dataset.area, &models, &request)
            .map_err(|e| e.to_string())?;

    // A single requested model that fails is an error; with several, failures are reported.
    if let [run] = forecast.models.as_slice() {
        if let Some(err) = run.error() {
            return Err(err.to_string());
        }
    }

    for run in &forecast.models {
        match &run.result {
            Ok(points) => println!("{}: {} forecasts", run.spec, points.len()),
            Err(err) => println!("{}: failed ({})", run.spec, err.reason),
        }
    }

    let rows = merge(dataset.area.observations(), &forecast.all_points());

    let text = match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::json!({
                "models": forecast.models,
                "rows": rows,
            });
            serde_json::to_string_pretty(&json).map_err(|e| format!("Failed to write JSON: {}", e))?
        }
        "csv" => {
            let mut buf = Vec::new();
            write_csv(&rows, &mut buf).map_err(|e| e.to_string())?;
            String::from_utf8(buf).map_err(|e| e.to_string())?
        }
        _ => return Err(format!("Unknown format: {}. Use 'json' or 'csv'", format)),
    };

    emit(&text, output.as_ref())
}

/// Run alert command
fn run_alert(
    input: InputArgs,
    critical: f64,
    margin: f64,
    rapid_loss: Option<f64>,
) -> CliResult<()> {
    let mut thresholds = RiskThresholds::new(critical, margin);
    if let Some(limit) = rapid_loss {
        thresholds = thresholds.with_rapid_loss(limit);
    }
    thresholds.validate().map_err(|e| e.to_string())?;

    let dataset = input.load(DatasetConfig::default())?;
    let latest = dataset.area.latest().map_err(|e| e.to_string())?;
    let assessment =
        evaluate(latest, dataset.area.previous(), &thresholds).map_err(|e| e.to_string())?;

    println!("{}", assessment.message());
    if let Some(delta) = assessment.delta {
        println!("Change since previous observation: {:+.2} sq.km", delta);
    }

    let json = serde_json::to_string_pretty(&assessment)
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Run report command
fn run_report(
    input: InputArgs,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let config = match config {
        Some(path) => AnalysisConfig::from_path(&path).map_err(|e| e.to_string())?,
        None => AnalysisConfig::default(),
    };

    let dataset = input.load(config.dataset.clone())?;
    let report = GlacierAnalysis::new(dataset)
        .run(&config)
        .map_err(|e| e.to_string())?;

    for err in report.failures() {
        println!("Warning: {}", err);
    }
    println!("{}", report.risk.message());

    let json = report
        .to_json()
        .map_err(|e| format!("Failed to write JSON: {}", e))?;
    emit(&json, output.as_ref())
}

/// Run ask command
fn run_ask(question: Vec<String>) -> CliResult<()> {
    let answer = GlacierBot::new().answer(&question.join(" "));
    println!("{}", answer.text());
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glacier=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary { input } => run_summary(input),

        Commands::Forecast {
            input,
            model,
            degree,
            order,
            from,
            horizon,
            step,
            floor,
            format,
            output,
        } => run_forecast(
            input, model, degree, order, from, horizon, step, floor, format, output,
        ),

        Commands::Alert {
            input,
            critical,
            margin,
            rapid_loss,
        } => run_alert(input, critical, margin, rapid_loss),

        Commands::Report {
            input,
            config,
            output,
        } => run_report(input, config, output),

        Commands::Ask { question } => run_ask(question),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!(parse_order("1,1,1").unwrap(), (1, 1, 1));
        assert_eq!(parse_order(" 2, 0 ,3").unwrap(), (2, 0, 3));
        assert!(parse_order("1,1").is_err());
        assert!(parse_order("a,b,c").is_err());
    }

    #[test]
    fn test_parse_models() {
        let all = parse_models("all", 3, "2,1,0").unwrap();
        assert_eq!(
            all,
            vec![
                ModelSpec::polynomial(3),
                ModelSpec::log_linear(),
                ModelSpec::arima(2, 1, 0),
            ]
        );
        assert_eq!(parse_models("LogLinear", 2, "1,1,1").unwrap(), vec![ModelSpec::log_linear()]);
        assert!(parse_models("holt", 2, "1,1,1").is_err());
    }

    #[test]
    fn test_input_overrides() {
        let args = InputArgs {
            input: PathBuf::from("gangotri.csv"),
            year_column: None,
            area_column: Some("area".to_string()),
            elevation_column: None,
            keep_first: true,
        };
        let config = args.dataset_config(DatasetConfig::default());
        assert_eq!(config.year_column, "year");
        assert_eq!(config.area_column, "area");
        assert_eq!(config.duplicate_policy, DuplicateYearPolicy::KeepFirst);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "glacier", "forecast", "--input", "g.csv", "--model", "arima", "--order", "2,1,1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Forecast { .. }));

        let cli = Cli::try_parse_from(["glacier", "ask", "what", "is", "ndsi"]).unwrap();
        match cli.command {
            Commands::Ask { question } => assert_eq!(question.join(" "), "what is ndsi"),
            _ => panic!("expected ask"),
        }
    }
}
