//! Observability for the book registry
//!
//! Logging goes through `tracing`. The subscriber is installed once at
//! startup by the CLI; library code only emits events.

use tracing_subscriber::EnvFilter;

/// Default filter when neither `RUST_LOG` nor the config names one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the log filter from `RUST_LOG` and the configured directive.
pub fn log_filter(configured: &str) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), configured)
}

/// A non-empty, parseable `RUST_LOG` wins over the configured directive.
/// If neither parses, [`DEFAULT_LOG_LEVEL`] is used.
fn resolve_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global fmt subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(configured: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(configured))
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_second_init_is_rejected() {
        init_logging("debug");
        assert!(!init_logging("debug"));
    }

    #[test]
    fn test_configured_level_used_without_env() {
        let filter = resolve_filter(None, "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_overrides_configured_level() {
        let filter = resolve_filter(Some("warn"), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = resolve_filter(Some("  "), "debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_unparseable_directives_fall_back() {
        let filter = resolve_filter(Some("book_registry=loud"), "trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = resolve_filter(None, "book_registry=loud");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
