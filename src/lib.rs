//! News Preprocessor Library
//!
//! Prepends a fixed stock-news analysis instruction to a raw news dump so the
//! combined file can be fed straight into an LLM prompt.

pub mod error;
pub mod preamble;
pub mod processing;
pub mod telemetry;
pub mod types;

pub use error::{FailureKind, PreprocessError};
pub use preamble::PREAMBLE;
pub use processing::FilePreprocessor;
pub use types::{LoggingConfig, PreprocessConfig, Processed};

/// Default input file with the raw stock news
pub const DEFAULT_INPUT_PATH: &str = "all_stock_news.txt";

/// Default output file with the instruction added
pub const DEFAULT_OUTPUT_PATH: &str = "processed_stock_news.txt";

/// Default log file
pub const DEFAULT_LOG_PATH: &str = "news_processing.log";

/// Default `EnvFilter` directives when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "news_preprocessor=info";
