//! Planner entry point.

use std::process::ExitCode;

use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use planner::{Args, Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.apply(Config::from_env());

    // 1. Initialize tracing; stdout is reserved for the report
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let (json, text) = match config.log_format {
        LogFormat::Json => (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();

    // 2. Install Prometheus metrics recorder when asked
    let metrics_handle = if config.metrics {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(error) => {
                tracing::warn!(%error, "failed to install Prometheus recorder");
                None
            }
        }
    } else {
        None
    };

    // 3. Run the manifest
    tracing::info!(manifest = %args.manifest.display(), parallel = config.parallel, "planning");

    let report = match planner::run_from_path(&args.manifest, &config) {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(%error, "planning failed");
            return ExitCode::FAILURE;
        }
    };

    // 4. Print the report
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(error) => {
            tracing::error!(%error, "failed to render report");
            return ExitCode::FAILURE;
        }
    }

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }

    ExitCode::SUCCESS
}
