//! eeg-analyze: simulate one EEG channel and run the analysis pipeline

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use eeg_core::DataSource;
use eeg_processing::{Pipeline, ProcessingConfig};
use eeg_simulation::{EegSimulator, RhythmPattern, SimulatorConfig};
use tracing::info;

use cli::{Cli, OutputFormat};
use report::Report;

fn main() -> Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_patterns {
        for (name, pattern) in RhythmPattern::presets() {
            println!("{:<12} {}", name, pattern.description());
        }
        return Ok(());
    }

    let base = match &cli.config {
        Some(path) => ProcessingConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ProcessingConfig::standard(),
    };
    let config = cli.apply_overrides(base);
    let pipeline = Pipeline::from_config(&config).context("invalid processing configuration")?;

    let mut source = EegSimulator::new(SimulatorConfig {
        sampling_rate: cli.rate,
        channel: cli.channel.clone(),
        pattern: cli.rhythm(),
        powerline_freq: if cli.no_powerline { None } else { Some(50.0) },
        seed: cli.seed,
        ..SimulatorConfig::default()
    })
    .context("invalid simulator settings")?;

    info!(source = %source.describe(), duration = cli.duration, "acquiring buffer");
    let buffer = source
        .next_buffer(cli.duration)
        .context("failed to generate EEG buffer")?;

    let output = pipeline
        .process(&buffer)
        .with_context(|| format!("pipeline '{}' failed", pipeline.name()))?;

    let report = Report::new(source.describe(), &config, &output);
    match cli.output {
        OutputFormat::Summary => print!("{}", report),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    Ok(())
}
