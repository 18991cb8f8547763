//! News Preprocessor - Main Entry Point
//!
//! Reads the configured news dump once, writes the prompt-ready file and exits.

use anyhow::Result;
use tracing::{error, info};

use news_preprocessor::{telemetry, FilePreprocessor, PreprocessConfig};

fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = PreprocessConfig::from_env();

    // Initialize tracing
    telemetry::init(&config.logging)?;

    info!("Starting news preprocessor v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Input: {}, output: {}",
        config.input_path.display(),
        config.output_path.display()
    );

    // Failures are reported through the log; the exit status stays 0.
    match FilePreprocessor::new(config).run() {
        Ok(_) => info!("News file processing completed successfully."),
        Err(_) => error!("News file processing failed."),
    }

    Ok(())
}
