use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use crate::SpectralzConfig;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "SPECTRALZ_LOG";

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the global `tracing` subscriber once per process.
///
/// Hosts often load several plug-in instances into one process, so repeated
/// calls are ignored, as is an already installed subscriber. `load` only runs
/// on the first call.
pub fn init<F>(load: F)
where
    F: FnOnce() -> SpectralzConfig,
{
    INIT.get_or_init(|| {
        let config = load();
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(config.log_ansi)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}
