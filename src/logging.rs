use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout is reserved for the report.
///
/// Honours `RUST_LOG`; `verbose` raises the default level to `debug`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
