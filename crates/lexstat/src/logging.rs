use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LEXSTAT_LOG";

/// Log to stderr. `-v` raises the level; `LEXSTAT_LOG` (EnvFilter syntax)
/// overrides it entirely.
pub(crate) fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
