//! tracing-subscriber setup for binaries and examples
//!
//! Library code only emits through `tracing` macros; installing a subscriber
//! is the embedding program's call, made once at startup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr fmt subscriber at `level`, honoring `RUST_LOG` overrides.
///
/// Safe to call more than once: a second install attempt is ignored rather
/// than panicking, since failure to log must never be fatal.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
