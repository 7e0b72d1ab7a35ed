//! `tracing` subscriber setup for binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{LogFormat, LogLevel};

/// Default filter directive: our crates at `level`, everything else at warn.
pub fn default_directive(level: LogLevel) -> String {
    format!(
        "warn,shop_commerce={level},shop_observability={level},plantshop={level}",
        level = level.as_str()
    )
}

/// Install the global subscriber. `RUST_LOG` overrides `level`.
///
/// Returns false if a subscriber was already installed.
pub fn init_tracing(level: LogLevel, format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let result = match format {
        LogFormat::Json => registry.with(layer.json()).try_init(),
        LogFormat::Human => registry.with(layer.compact()).try_init(),
    };

    result.is_ok()
}
