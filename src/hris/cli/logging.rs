use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// prompts. `RUST_LOG` wins over the verbosity flag when set.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "hris=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
