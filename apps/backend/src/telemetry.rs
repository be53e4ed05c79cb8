//! Process-wide tracing setup for the server binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset: engine rejections and the access log at
/// `info`, the rest of the dependency tree at `warn`.
const DEFAULT_FILTER: &str = "warn,bowling_backend=info,actix_web=info";

/// Install a JSON subscriber writing one object per line to stdout.
///
/// Each event carries the fields of the enclosing `request` span, so a
/// roll the engine rejects is logged with the request's `trace_id`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .init();
}
