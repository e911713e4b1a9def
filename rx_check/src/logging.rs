/**
 * Log output setup.
 */

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Sends log records to stderr. Levels come from the `RX_LOG` environment
/// variable (`RX_LOG=rx_lint=debug`), falling back to `rx=info`. Calling
/// this more than once does nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RX_LOG")
            .unwrap_or_else(|_| EnvFilter::new("rx=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
