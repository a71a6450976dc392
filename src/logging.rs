//! Logging init for the command line tool.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug output for
/// this crate.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,lazyimport=debug"
    } else {
        "warn,lazyimport=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}
