//! Diagnostic logging to stderr
//!
//! Status lines of the commands go to stdout; everything routed through
//! `tracing` lands on stderr so preview output stays clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a `-v` count
fn default_directive(verbosity: u8) -> &'static str {
  match verbosity {
    0 => "warn",
    1 => "warn,codelog=info",
    2 => "info,codelog=debug",
    _ => "debug,codelog=trace",
  }
}

/// Install the global subscriber; `RUST_LOG` wins over the verbosity flag
pub fn init(verbosity: u8) {
  let directive = std::env::var("RUST_LOG").unwrap_or_else(|_| default_directive(verbosity).to_string());
  let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

  // A second init (tests) keeps the first subscriber
  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .compact(),
    )
    .try_init();
}
