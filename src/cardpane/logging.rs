use tracing_subscriber::EnvFilter;

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, raised to
/// `debug` for this crate when `verbose` is on. Calling it twice is harmless.
pub fn init(default_filter: &str, verbose: bool) {
    let fallback = if verbose {
        format!("{default_filter},cardpane=debug")
    } else {
        default_filter.to_string()
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
