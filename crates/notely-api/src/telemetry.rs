//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing with a compact console format.
///
/// The filter defaults to `notely=debug,tower_http=debug` and can be
/// overridden through `RUST_LOG`. Safe to call once per process; repeated
/// calls (e.g. from tests) are ignored.
pub fn init_telemetry() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notely=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .try_init();
}
