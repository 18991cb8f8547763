//! Configuration types for a preprocessing run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::preamble::PREAMBLE;
use crate::{DEFAULT_INPUT_PATH, DEFAULT_LOG_FILTER, DEFAULT_LOG_PATH, DEFAULT_OUTPUT_PATH};

/// Everything a [`FilePreprocessor`](crate::FilePreprocessor) needs for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// File holding the raw news items
    pub input_path: PathBuf,

    /// File the preamble + news is written to
    pub output_path: PathBuf,

    /// Text placed above the news items
    pub preamble: String,

    /// Where run reports go
    pub logging: LoggingConfig,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            preamble: PREAMBLE.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PreprocessConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to the crate defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            input_path: lookup("NEWS_INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH)),
            output_path: lookup("NEWS_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
            preamble: PREAMBLE.to_string(),
            logging: LoggingConfig {
                log_path: lookup("NEWS_LOG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH)),
                filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                ..Default::default()
            },
        }
    }

    /// Create a config for the given input and output files.
    pub fn with_paths(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            input_path: input.as_ref().to_path_buf(),
            output_path: output.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Set the preamble.
    pub fn with_preamble(mut self, preamble: &str) -> Self {
        self.preamble = preamble.to_string();
        self
    }

    /// Set the log file.
    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.logging.log_path = path.as_ref().to_path_buf();
        self
    }
}

/// Log sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file, opened in append mode
    pub log_path: PathBuf,

    /// `EnvFilter` directive string
    pub filter: String,

    /// Whether records are also written to stderr
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            filter: DEFAULT_LOG_FILTER.to_string(),
            console: true,
        }
    }
}
