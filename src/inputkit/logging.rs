use tracing_subscriber::filter::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only errors are logged, since
/// diagnostics already reach the user as command messages; `--verbose`
/// switches to `debug` for this crate.
pub fn init(verbose: bool) {
    let default_level = if verbose { "inputkit=debug" } else { "error" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
