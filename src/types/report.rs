//! Result of a successful run.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a completed preprocessing run.
#[derive(Debug, Clone, Serialize)]
pub struct Processed {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Characters of news text after trimming
    pub input_chars: usize,
    /// Bytes written to the output file
    pub output_bytes: usize,
    pub completed_at: DateTime<Utc>,
}
