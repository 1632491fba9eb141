//! Log-capturing facilities.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initializes [`tracing-subscriber`] with a layer that emits logs to STDERR.
///
/// The filter is taken from the `RUST_LOG` environment variable.
pub fn init() {
	let stderr = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_span_events(FmtSpan::ACTIVE)
		.pretty()
		.with_filter(EnvFilter::from_default_env());

	tracing_subscriber::registry().with(stderr).init();

	tracing::info! {
		target: "szoniska_api::audit_log",
		"initialized logging",
	};
}
