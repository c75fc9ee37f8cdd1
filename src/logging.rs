//! Tracing setup for applications using the context framework
//!
//! The library itself only emits `tracing` events. Binaries and tests that
//! want to see them can call [`init_tracing`] once at startup.

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install color-eyre report hooks and a global fmt subscriber
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
///
/// # Errors
/// Fails if the hooks or a global subscriber were already installed.
///
/// # Example
/// ```no_run
/// // RUST_LOG=context_framework=trace shows every store access
/// context_framework::logging::init_tracing()?;
/// tracing::info!("context tracking ready");
/// # Ok::<(), color_eyre::Report>(())
/// ```
pub fn init_tracing() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
