//! Tracing subscriber initialization.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Initialize `tracing` and format developer logs.
///
/// Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=emptiness::classify=trace`),
/// falling back to `info`. Does nothing if a global subscriber already exists.
pub fn init_tracing() -> Result<()> {
    init_tracing_with_default(DEFAULT_FILTER)
}

/// Same as [`init_tracing`] with a caller-chosen fallback directive.
pub fn init_tracing_with_default(default_directive: &str) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| anyhow::anyhow!("invalid tracing filter `{default_directive}`: {err}"))?;
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
