//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with query results on stdout. The
//! level comes from `RUST_LOG` and defaults to `warn`.
//!
//! ```bash
//! RUST_LOG=recsieve=debug recsieve vessels.json -q "WHERE length > 200"
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
