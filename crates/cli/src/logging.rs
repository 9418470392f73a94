use iniparser_core::config::types::LoggingConfig;
use std::fs::File;
use std::io::IsTerminal;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Install the global subscriber: diagnostics on stderr, plus a log file
/// when `logging.file` is configured. `RUST_LOG` directives still apply.
pub fn init(cfg: &LoggingConfig) {
    let (stderr_level, file_level) = levels(cfg);

    let stderr = std::io::stderr();
    let stderr_layer = fmt::layer()
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter_for(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.file else {
        registry.init();
        return;
    };

    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(1);
    });

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_for(file_level));

    registry.with(file_layer).init();
}

/// Levels for the stderr and file outputs. The file falls back to the
/// stderr level name, then to debug when that name is not recognised.
fn levels(cfg: &LoggingConfig) -> (LevelFilter, LevelFilter) {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);
    let file_level = parse_level(cfg.file_level.as_deref().unwrap_or(&cfg.level))
        .unwrap_or(LevelFilter::DEBUG);
    (stderr_level, file_level)
}

fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: &str, file_level: Option<&str>) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            file_level: file_level.map(str::to_string),
            file: None,
        }
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("invalid"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_file_level_follows_stderr_level() {
        assert_eq!(levels(&config("warn", None)), (LevelFilter::WARN, LevelFilter::WARN));
    }

    #[test]
    fn test_file_level_override() {
        assert_eq!(
            levels(&config("error", Some("trace"))),
            (LevelFilter::ERROR, LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_unknown_levels_fall_back() {
        assert_eq!(levels(&config("loud", None)), (LevelFilter::INFO, LevelFilter::DEBUG));
    }
}
