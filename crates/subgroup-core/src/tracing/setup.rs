//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "SUBGROUP_LOG";

/// Initialize the tracing/logging system.
///
/// Reads `SUBGROUP_LOG` for per-stage log levels.
/// Format: `SUBGROUP_LOG=subgroup_mining::fpgrowth=debug,subgroup_mining=info`
///
/// Falls back to `subgroup=info` if `SUBGROUP_LOG` is not set or is invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("subgroup=info"));

        // A host application may already have installed a subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
