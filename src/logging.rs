//! Tracing subscriber setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when neither `RUST_LOG` nor the settings name one
pub const DEFAULT_FILTER: &str = "fintrack=warn";

static TRACING_INIT: Once = Once::new();

/// Pick the filter directive: `RUST_LOG`, then the configured one, then the default
fn build_filter(configured: Option<&str>) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return EnvFilter::from_default_env();
    }
    configured
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber once; later calls are no-ops
///
/// Logs go to stderr so report output on stdout stays clean.
pub fn init_tracing(configured: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let filter = build_filter(configured);
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
