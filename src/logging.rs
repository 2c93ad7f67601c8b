//! Diagnostic output for the `roster` binary.
//!
//! The library only emits `tracing` events. Binaries decide where they go by
//! calling [`initialize`] once at startup.

use tracing_subscriber::EnvFilter;

/// Level used when neither the caller nor `RUST_LOG` asks for one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the event filter.
///
/// An explicit `level` wins over `RUST_LOG`. Unparseable directives fall back
/// to [`DEFAULT_LEVEL`].
#[must_use]
pub fn env_filter(level: Option<&str>) -> EnvFilter {
	match level {
		Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
	}
}

/// Install a compact stderr subscriber. Later calls are ignored.
pub fn initialize(level: Option<&str>) {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter(level))
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.try_init();
}
