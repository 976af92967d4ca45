use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bestspot_core::config::EngineConfig;
use bestspot_core::pipeline::{recommend, SensorCsvBundle};
use bestspot_core::types::PreferenceSelection;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find Your Best Spot recommendation engine", long_about = None)]
struct Cli {
    /// Light CSV (zone rows, named day-period columns)
    #[arg(long)]
    light: Option<PathBuf>,

    /// Noise CSV (hour rows, one column per zone)
    #[arg(long)]
    noise: Option<PathBuf>,

    /// Temperature CSV (zone rows, hourly columns)
    #[arg(long)]
    temperature: Option<PathBuf>,

    /// Ambient-to-perceived temperature CSV
    #[arg(long)]
    feels_like: Option<PathBuf>,

    /// Engine configuration TOML; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lighting preference (e.g. dim, moderate, well-lit, bright)
    #[arg(long)]
    lighting: Option<String>,

    /// Noise preference (e.g. silent, focus-work, collaborative, lively)
    #[arg(long = "noise-level")]
    noise_level: Option<String>,

    /// Temperature preference (e.g. cool, stable-comfortable, warm)
    #[arg(long = "temperature-pref")]
    temperature_pref: Option<String>,

    /// Minimum milliseconds before results are surfaced; overrides the
    /// configured surface delay
    #[arg(long)]
    min_wait_ms: Option<u64>,

    /// Write the recommendation JSON here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let started = Instant::now();

    // Best-effort parallel fetches: a failed read degrades to an empty
    // dataset for that sensor and the pipeline continues.
    let (light, noise, temperature, feels_like) = tokio::join!(
        read_csv("light", cli.light.as_deref()),
        read_csv("noise", cli.noise.as_deref()),
        read_csv("temperature", cli.temperature.as_deref()),
        read_csv("feels_like", cli.feels_like.as_deref()),
    );
    let bundle = SensorCsvBundle {
        light,
        noise,
        temperature,
        feels_like,
    };

    let selection = PreferenceSelection {
        lighting: cli.lighting,
        noise: cli.noise_level,
        temperature: cli.temperature_pref,
    };

    let recommendation = recommend(&bundle, &selection, &config);
    info!(
        best = %recommendation.zones[0].zone_id,
        comfort = recommendation.zones[0].comfort_score,
        "recommendation computed"
    );

    // Minimum-duration gate: results are never surfaced before the
    // configured delay has elapsed, even when computation was faster.
    let gate = Duration::from_millis(cli.min_wait_ms.unwrap_or(config.surface_delay_ms));
    if let Some(remaining) = gate.checked_sub(started.elapsed()) {
        tokio::time::sleep(remaining).await;
    }

    let json = serde_json::to_string_pretty(&recommendation)?;
    match cli.output {
        Some(path) => {
            tokio::fs::write(&path, &json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "recommendations written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

async fn read_csv(sensor: &'static str, path: Option<&Path>) -> Option<String> {
    let path = path?;
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(
                sensor,
                path = %path.display(),
                error = %err,
                "failed to read CSV, continuing without this sensor"
            );
            None
        }
    }
}
