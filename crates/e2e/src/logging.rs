//! Tracing setup for the test binaries.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the tracing subscriber once per test binary.
///
/// The default filter keeps harness output and quiets the per-command
/// client noise; set `E2E_LOG` to override (e.g. `E2E_LOG=debug` to see
/// every WebDriver command).
pub fn init() {
    INIT.call_once(|| {
        let filter = std::env::var("E2E_LOG").unwrap_or_else(|_| "info,wd=warn".into());
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .ok();
    });
}
