//! Tracing setup: human-readable console output plus optional rolling JSON files.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const CRATES: [&str; 3] = ["notekeep", "notekeep_server", "notekeep_config"];

/// Filter directive enabling `level` for every notekeep crate, `fallback` elsewhere.
fn directives(level: &str, fallback: &str) -> String {
    let mut parts: Vec<String> = CRATES.iter().map(|c| format!("{}={}", c, level)).collect();
    parts.push(fallback.to_string());
    parts.join(",")
}

/// Filter for a configured level, or an error message naming the bad level.
fn level_filter(level: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directives(level, "warn"))
        .map_err(|e| format!("Invalid log level '{}' ({}), using 'info'", level, e))
}

/// Console filter. `RUST_LOG` wins over both `--verbose` and the configured level.
///
/// Also returns a warning to emit once the subscriber is installed.
fn console_filter(verbose: bool, level: &str) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    if verbose {
        return (
            EnvFilter::new(format!("{},tower_http=debug", directives("debug", "info"))),
            None,
        );
    }
    match level_filter(level) {
        Ok(filter) => (filter, None),
        Err(warning) => (EnvFilter::new(directives("info", "warn")), Some(warning)),
    }
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held
/// for the life of the process.
pub fn init(verbose: bool, level: &str, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_writer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "notekeep.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_filter(EnvFilter::new(directives("trace", "info")))
    });

    let (filter, filter_warning) = console_filter(verbose, level);

    // stdout is reserved for command output such as `notekeep openapi`.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(file_layer)
        .init();

    if let Some(warning) = filter_warning {
        tracing::warn!("{}", warning);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives() {
        assert_eq!(
            directives("debug", "warn"),
            "notekeep=debug,notekeep_server=debug,notekeep_config=debug,warn"
        );
    }

    #[test]
    fn test_valid_level_accepted() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            assert!(level_filter(level).is_ok(), "level: {level}");
        }
    }

    #[test]
    fn test_invalid_level_reported() {
        let warning = level_filter("verbose").unwrap_err();
        assert!(warning.contains("'verbose'"));
        assert!(warning.contains("using 'info'"));
    }
}
