//! Logging configuration and initialization
//!
//! Events from this crate follow `-v`; dependencies stay at `warn` unless
//! `ROSTER_LOG` replaces the whole filter.

use crate::app::config::AppConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive string
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Filter directives for `config`, unless `override_directives` is set.
pub fn filter_directives(config: &AppConfig, override_directives: Option<String>) -> String {
    override_directives
        .map(|directives| directives.trim().to_string())
        .filter(|directives| !directives.is_empty())
        .unwrap_or_else(|| format!("warn,roster={}", config.log_level()))
}

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    let directives = filter_directives(config, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("⚠️  Ignoring invalid {LOG_ENV} ({e})");
        EnvFilter::new(format!("warn,roster={}", config.log_level()))
    });

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2)
        .with_line_number(config.verbose >= 2)
        .init();

    debug!("Roster logging at {}", directives);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(verbose: u8) -> AppConfig {
        AppConfig {
            verbose,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_directives_scope_verbosity_to_crate() {
        assert_eq!(filter_directives(&config(0), None), "warn,roster=info");
        assert_eq!(filter_directives(&config(1), None), "warn,roster=debug");
        assert_eq!(filter_directives(&config(2), None), "warn,roster=trace");
    }

    #[test]
    fn test_env_directives_replace_defaults() {
        assert_eq!(
            filter_directives(&config(0), Some("roster::activity=trace".into())),
            "roster::activity=trace"
        );
        assert_eq!(
            filter_directives(&config(1), Some("   ".into())),
            "warn,roster=debug"
        );
    }
}
