//! `tracing` output for the browser console

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_web::MakeWebConsoleWriter;

/// Install the global subscriber. `level` is an `EnvFilter` directive;
/// an unparsable directive falls back to `info`.
pub fn init(level: &str) {
  let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
  // No wall clock in wasm32-unknown-unknown; the console stamps lines itself
  let console = tracing_subscriber::fmt::layer()
    .with_ansi(false)
    .without_time()
    .with_writer(MakeWebConsoleWriter::new());

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(console)
    .try_init();
}
