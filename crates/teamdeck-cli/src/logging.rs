use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Overrides `--log-level` when set, with full `EnvFilter` syntax
pub const LOG_ENV: &str = "TEAMDECK_LOG";

/// Install the stderr subscriber. Stdout stays reserved for command output
/// so JSON and CSV remain pipeable.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    // A second init (tests driving `run` in-process) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
