//! Helpers shared by the unit tests.

use std::sync::Once;

use tracing_subscriber::EnvFilter;


static TRACING: Once = Once::new();

/// Sends `tracing` events to the test output, filtered by `RUST_LOG` (`debug` by default). Safe
/// to call from every test.
pub(crate) fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // Another test harness may have installed a subscriber already; that one wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
