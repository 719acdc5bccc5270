use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global JSON tracing subscriber.
///
/// `RUST_LOG` always wins. Without it, quiet mode only lets errors through and
/// verbose mode shows debug events (dead nodes, skipped predicates, hook traffic).
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(quiet));

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second call (tests, embedding apps) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn default_filter(quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("debug")
    }
}
