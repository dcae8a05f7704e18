//! tracingの初期化

use tracing_subscriber::EnvFilter;

/// `RUST_LOG`があればそれを優先。なければ`--verbose`でdebug、通常はwarn
pub fn init(verbose: bool) {
    let default_level = if verbose { "accident_detect=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
