//! Diagnostic logging on stderr through `tracing`.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

/// Initialize the global subscriber once.
///
/// `verbosity` comes from `-v` flags: 0 = warn, 1 = info, 2+ = debug.
/// `RUST_LOG` overrides the crate directive when set.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    });
}
