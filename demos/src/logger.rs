//! Log output for the `gridwalk` command.
//!
//! The search crates log through the `log` facade; the subscriber installed
//! here forwards those records to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `debug` or
/// `gridwalk_paths=trace`.
pub const LOG_ENV: &str = "GRIDWALK_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter for `-v` repetitions. Any `-v` wins over the directives
/// in `env`; without either only warnings are shown.
pub fn env_filter(verbosity: u8, env: Option<&str>) -> EnvFilter {
    let directive = match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    match (directive, env) {
        (Some(d), _) => EnvFilter::new(d),
        (None, Some(env)) => {
            EnvFilter::try_new(env).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
        (None, None) => EnvFilter::new(DEFAULT_DIRECTIVE),
    }
}

/// Install a stderr subscriber filtered by `-v` and [`LOG_ENV`].
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity, env.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
}
