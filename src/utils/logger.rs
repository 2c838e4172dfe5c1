use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG wins; otherwise only our own crate logs, at debug when verbose.
fn scan_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "has_rse=debug,warn" } else { "has_rse=info,warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(scan_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// JSON lines for CI runs where the log is collected by another tool.
/// Keeps targets and timestamps so the lines can be filtered downstream.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(scan_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .flatten_event(true),
        )
        .init();
}
