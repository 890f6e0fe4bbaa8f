use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Default directive when `RUST_LOG` is not set.
pub fn default_filter(crate_name: &str, level: &str) -> String {
    format!("{}={},svckit={}", crate_name.replace('-', "_"), level, level)
}

/// Install the global subscriber writing to a log file.
///
/// The terminal belongs to the UI while it runs, so nothing goes to stdout.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_file_logging(
    crate_name: &str,
    config: &ObservabilityConfig,
) -> anyhow::Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(crate_name, &config.log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_module_name() {
        assert_eq!(
            default_filter("resolve-dash", "debug"),
            "resolve_dash=debug,svckit=debug"
        );
    }
}
