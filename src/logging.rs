//! Logging setup.
//!
//! Logs go to stderr so `seminar list` output on stdout stays clean.

use crate::error::{Result, SeminarError};
use tracing_subscriber::{
    filter::{Directive, EnvFilter},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

/// Parse a configured level such as `"info"` into a filter directive.
pub fn parse_level(level: &str) -> Result<Directive> {
    level
        .trim()
        .to_ascii_lowercase()
        .parse()
        .map_err(|e| SeminarError::Config(format!("Invalid log level {:?}: {}", level, e)))
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level)?)
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| SeminarError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!("Logging initialized at {}", level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert!(parse_level("info").is_ok());
        assert!(parse_level(" WARN ").is_ok());
        assert!(parse_level("off").is_ok());
    }

    #[test]
    fn test_parse_level_rejects_garbage() {
        assert!(matches!(parse_level("seminar=loud"), Err(SeminarError::Config(_))));
    }
}
