//! Shared components for CLI commands

use crate::cli::args::Args;
use tracing::debug;

/// Set up console diagnostics on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Safe to call more
/// than once; later calls keep the first subscriber.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dq_audit={}", log_level)));

    let initialised = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    if initialised.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
