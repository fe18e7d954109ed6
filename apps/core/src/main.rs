// transcript-features CLI
// Reads one transcript from a file (or stdin) and prints its feature report as JSON.

use anyhow::{Context, Result};
use std::io::Read;
use tracing::{error, info};

use transcript_features::{logging, ExtractorConfig, FeatureExtractor};

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read transcript from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript from {}", path)),
    }
}

fn run() -> Result<()> {
    let config = ExtractorConfig::from_env().context("Invalid configuration")?;
    logging::init(&config);

    let path = std::env::args().nth(1);
    let text = read_input(path.as_deref())?;

    let extractor = FeatureExtractor::from_config(&config);
    let report = extractor
        .analyze(&text)
        .context("Feature extraction failed")?;
    info!(
        processing_time_ms = report.processing_time_ms,
        "Transcript analyzed"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
