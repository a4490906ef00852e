use crate::args::LogLevel;
use is_terminal::IsTerminal;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Crates whose events are shown at the `--log-level` threshold
const IOR_ARGS_CRATES: &[&str] = &["ior_args", "ior_args_core", "ior_args_extract"];

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Build the filter. A non-empty `RUST_LOG` is used as is; otherwise our
/// crates log at `level` and everything else at error.
pub fn env_filter(level: LogLevel) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|directives| !directives.trim().is_empty());
    if from_env.is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    level_filter(level)
}

fn level_filter(level: LogLevel) -> EnvFilter {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy("");

    for crate_name in IOR_ARGS_CRATES {
        if let Ok(directive) = format!("{crate_name}={level}").parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Initialize the stderr subscriber. Later calls are no-ops.
pub fn init(level: LogLevel) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter(level))
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .without_time()
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
    }

    #[test]
    fn test_level_filter_includes_crate_directives() {
        let rendered = level_filter(LogLevel::Debug).to_string();
        assert!(rendered.contains("ior_args_extract=debug"));
        assert!(rendered.contains("ior_args=debug"));
    }
}
