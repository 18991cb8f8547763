//! Core types for the preprocessor.

mod config;
mod report;

pub use config::{LoggingConfig, PreprocessConfig};
pub use report::Processed;
