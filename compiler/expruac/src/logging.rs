//! Tracing setup for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "EXPRUA_LOG";

/// Install a stderr subscriber if `EXPRUA_LOG` or `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var(LOG_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::new(directives))
            .init();
    });
}
