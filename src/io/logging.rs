//! Log level selection and subscriber installation

use crate::io::configuration::LOG_LEVEL_ENV_VAR;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map a level name to a tracing level, defaulting to `INFO`
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Resolve the level from `LOG_LEVEL`, capped at `WARN` when quiet
pub fn resolve_level(env_value: Option<&str>, quiet: bool) -> Level {
    let level = env_value.map_or(Level::INFO, parse_level);
    if quiet && level > Level::WARN {
        Level::WARN
    } else {
        level
    }
}

/// Install the global stderr subscriber
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging(quiet: bool) -> bool {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(resolve_level(env_value.as_deref(), quiet))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
