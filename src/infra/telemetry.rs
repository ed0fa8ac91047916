use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable controlling the log filter, e.g. `foglio=debug`.
pub const LOG_ENV: &str = "FOGLIO_LOG";

/// Install the global tracing subscriber. Safe to call once per process;
/// a second install attempt is ignored so tests can call it freely.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_target(true))
        .try_init();
}
