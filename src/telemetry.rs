//! Tracing setup: console plus an append-only log file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::types::LoggingConfig;

/// Build a subscriber that writes to stderr (if enabled) and to `file_writer`.
///
/// Nothing is installed; callers either pass the result to
/// `tracing::subscriber::with_default` or use [`init`].
pub fn build_subscriber<W>(config: &LoggingConfig, file_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console = config
        .console
        .then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.filter))
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
}

/// Open the log file and install the process-wide subscriber.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;

    build_subscriber(config, Mutex::new(file))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory log sink shared between a subscriber and the test.
    #[derive(Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::SharedBuffer;
    use super::*;
    use tempfile::TempDir;
    use tracing::{debug, info, warn};

    fn quiet(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: filter.to_string(),
            console: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_file_sink_receives_records() {
        let buffer = SharedBuffer::default();
        let subscriber = build_subscriber(&quiet("info"), buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            info!("Input file read");
            warn!("Input file is empty");
        });

        let logs = buffer.contents();
        assert!(logs.contains("INFO"));
        assert!(logs.contains("Input file read"));
        assert!(logs.contains("WARN"));
        assert!(!logs.contains("\u{1b}["));
    }

    #[test]
    fn test_filter_drops_debug() {
        let buffer = SharedBuffer::default();
        let subscriber = build_subscriber(&quiet("info"), buffer.clone());

        tracing::subscriber::with_default(subscriber, || {
            debug!("noisy detail");
        });

        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_init_fails_on_unopenable_log_file() {
        let dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            log_path: dir.path().join("missing").join("news.log"),
            ..quiet("info")
        };

        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
