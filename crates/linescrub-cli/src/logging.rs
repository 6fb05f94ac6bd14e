// crates/linescrub-cli/src/logging.rs

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "linescrub_core=info,linescrub_cli=info";

/// Human-readable logs on stderr; stdout stays free for `line` output.
/// `RUST_LOG` replaces the default filter when set.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
