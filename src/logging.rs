use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr so that stdout only
/// ever carries aggregated text.
///
/// `RUST_LOG` wins over `verbosity` when set.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
