//! Processing module for turning a raw news dump into a prompt-ready file.

pub mod file_processor;

pub use file_processor::FilePreprocessor;
