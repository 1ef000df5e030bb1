use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install the test logging subscriber once per process.
///
/// `RUST_LOG` controls the filter; defaults to `debug` when unset.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );

        // Another test binary may have installed one already
        if subscriber.try_init().is_err() {
            tracing::debug!("tracing subscriber already set");
        }
    });
}
