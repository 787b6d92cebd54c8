//! Diagnostic logging via tracing-subscriber
//!
//! Call [`init`] once at startup. Logs go to stderr so they never mix with
//! puzzle answers on stdout.

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
#[error("failed to set subscriber: {0}")]
pub struct LogError(String);

/// Level for a repeated `-v` flag count
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Filter from `RUST_LOG` if it parses, otherwise from the `-v` count
fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level_for_verbosity(verbosity).into()))
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns `LogError` if a subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), LogError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LogError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_for_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
        assert_eq!(level_for_verbosity(3), LevelFilter::TRACE);
        assert_eq!(level_for_verbosity(u8::MAX), LevelFilter::TRACE);
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init(0);
        let err = init(0).unwrap_err();
        assert!(err.to_string().starts_with("failed to set subscriber"));
    }
}
