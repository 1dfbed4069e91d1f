//! AHP Engine CLI
//!
//! Reads a decision document, runs the ranking pipeline and prints weights,
//! consistency ratios and the final ranking.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ahp_engine::adapters::report::{render_consistency, render_ranking};
use ahp_engine::adapters::FileDecisionSource;
use ahp_engine::application::{
    ConsistencyReportHandler, RankAlternativesCommand, RankAlternativesHandler,
};
use ahp_engine::config::{AppConfig, LoggingConfig};
use ahp_engine::ports::DecisionSource;

/// Rank alternatives with the Analytic Hierarchy Process
#[derive(Parser, Debug)]
#[command(name = "ahp-engine")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Decision document (.json, .yaml or .yml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Largest acceptable consistency ratio (overrides configuration)
    #[arg(short, long, value_name = "CR")]
    threshold: Option<f64>,

    /// Report the consistency of every comparison set instead of ranking
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when the consistency check found a rejected set.
fn run(cli: &Cli) -> Result<bool> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(threshold) = cli.threshold {
        config.engine.consistency_threshold = threshold;
    }
    config.validate()?;

    init_tracing(&config.logging);

    let source = FileDecisionSource::new(&cli.file);
    let model = source.load()?;
    let gate = config.engine.gate()?;

    if cli.check {
        let report = ConsistencyReportHandler::new(gate).handle(&model);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print!("{}", render_consistency(&report));
        }
        return Ok(report.all_accepted());
    }

    let result = RankAlternativesHandler::new(gate).handle(&RankAlternativesCommand {
        model: model.clone(),
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_ranking(&model, &result));
    }

    Ok(true)
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean
/// for piping.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}
