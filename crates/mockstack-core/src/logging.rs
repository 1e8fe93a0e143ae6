//! Tracing subscriber setup shared by binaries and test harnesses.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::error::MockStackResult;

/// Initialize the global tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`. Calling it a
/// second time is harmless; the first subscriber stays installed.
///
/// # Errors
/// [`MockStackError::Internal`](crate::MockStackError::Internal) if the level
/// is not a valid filter.
pub fn init_tracing(log_level: &str) -> MockStackResult<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    Ok(())
}
