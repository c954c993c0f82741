//! Logging configuration for familyvault.
//!
//! Logs are diagnostics only and go to stderr. Stdout is reserved for record
//! confirmations and the summary report.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log verbosity chosen with `-q` and `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// No flag.
    #[default]
    Normal,
    /// `-v`
    Verbose,
    /// `-vv` or more.
    Trace,
}

impl Verbosity {
    /// The level this verbosity selects.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Build the default filter directive for the crate.
///
/// A configured level only applies at [`Verbosity::Normal`]; explicit
/// `-q`/`-v` flags win over it.
#[must_use]
pub fn default_directive(verbosity: Verbosity, configured: Option<&str>) -> String {
    let level = match (verbosity, configured) {
        (Verbosity::Normal, Some(level)) => level.to_lowercase(),
        _ => verbosity.to_level_filter().to_string().to_lowercase(),
    };
    format!("familyvault={level}")
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over both `verbosity` and the configured
/// level. Later calls are no-ops.
pub fn init_logging(verbosity: Verbosity, configured: Option<&str>) {
    let default_filter = default_directive(verbosity, configured);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_default_directive_from_verbosity() {
        assert_eq!(default_directive(Verbosity::Normal, None), "familyvault=info");
        assert_eq!(default_directive(Verbosity::Verbose, None), "familyvault=debug");
        assert_eq!(default_directive(Verbosity::Quiet, None), "familyvault=error");
    }

    #[test]
    fn test_configured_level_applies_only_without_flags() {
        assert_eq!(
            default_directive(Verbosity::Normal, Some("WARN")),
            "familyvault=warn"
        );
        assert_eq!(
            default_directive(Verbosity::Verbose, Some("warn")),
            "familyvault=debug"
        );
        assert_eq!(
            default_directive(Verbosity::Quiet, Some("trace")),
            "familyvault=error"
        );
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(Verbosity::Normal, Some("debug"));
        init_logging(Verbosity::Trace, None);
    }
}
