//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise `default_level` is applied to the
/// crate named `crate_name` and to `tower_http`, and everything else logs at `warn`.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(default_filter_directive(crate_name, default_level))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

fn default_filter_directive(crate_name: &str, level: &str) -> String {
    // Bin names use hyphens, tracing targets use the library's underscored name.
    let target = crate_name.replace('-', "_");
    format!("warn,{target}={level},tower_http={level}")
}
