//! File preprocessor for the news analysis pipeline.
//!
//! Reads the raw news dump, puts the analysis instruction in front of it
//! and writes the result where the downstream prompt step picks it up.

use std::fs;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::error::{FailureKind, PreprocessError};
use crate::preamble;
use crate::types::{PreprocessConfig, Processed};

/// Runs the read → prepend → write step once per call.
pub struct FilePreprocessor {
    config: PreprocessConfig,
}

impl Default for FilePreprocessor {
    fn default() -> Self {
        Self::new(PreprocessConfig::default())
    }
}

impl FilePreprocessor {
    /// Create a new preprocessor with the given configuration.
    pub fn new(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Process the configured input file and report the outcome.
    ///
    /// Emits exactly one `info`, `warn` or `error` record describing how the
    /// run ended. The output file is only written when the input exists and
    /// is non-blank.
    pub fn run(&self) -> Result<Processed, PreprocessError> {
        let result = self.process();

        match &result {
            Ok(done) => info!(
                input_chars = done.input_chars,
                output_bytes = done.output_bytes,
                "Processed content saved to {}",
                done.output_path.display()
            ),
            Err(err) => match err.kind() {
                FailureKind::MissingInput | FailureKind::EmptyInput => warn!("{}", capitalize(err)),
                FailureKind::IoFailure => error!("{}", capitalize(err)),
            },
        }

        result
    }

    fn process(&self) -> Result<Processed, PreprocessError> {
        let input = &self.config.input_path;
        let output = &self.config.output_path;

        if !input.exists() {
            return Err(PreprocessError::MissingInput {
                path: input.clone(),
            });
        }

        let content =
            fs::read_to_string(input).map_err(|e| PreprocessError::io_error(input, e))?;

        let combined = preamble::compose(&self.config.preamble, &content).ok_or_else(|| {
            PreprocessError::EmptyInput {
                path: input.clone(),
            }
        })?;

        debug!("Successfully read content from {}", input.display());

        fs::write(output, &combined).map_err(|e| PreprocessError::io_error(output, e))?;

        Ok(Processed {
            input_path: input.clone(),
            output_path: output.clone(),
            input_chars: content.trim().chars().count(),
            output_bytes: combined.len(),
            completed_at: Utc::now(),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }
}

fn capitalize(err: &PreprocessError) -> String {
    let message = err.to_string();
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => message,
    }
}
