use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "bench=info";

/// Initialise tracing subscriber once per process.
///
/// Events go to stderr so stdout only carries timing results. A subscriber
/// installed by someone else is left in place.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(io::stderr)
            .compact()
            .try_init();

        if installed.is_ok() {
            tracing::debug!("logging initialised");
        }
    });
}
