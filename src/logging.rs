use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{AppError, AppResult};

/// Logs go to stderr so they never mix with copyable output. `RUST_LOG`
/// overrides the default level.
pub fn init(verbose: bool) -> AppResult<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|err| AppError::Configuration(format!("invalid log filter: {err}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| AppError::Configuration(format!("failed to initialize logging: {err}")))
}
