use crate::Cli;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `GAUGE_LOG` wins over `RUST_LOG`; with neither set the level follows
/// `-v` / `--quiet`. `--quiet` always caps output at errors.
pub fn init(cli: &Cli) {
    let filter = if cli.is_quiet() {
        EnvFilter::new("error")
    } else {
        env_filter().unwrap_or_else(|| EnvFilter::new(cli.log_level()))
    };

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn env_filter() -> Option<EnvFilter> {
    ["GAUGE_LOG", "RUST_LOG"].iter().find_map(|var| {
        let directives = std::env::var(var).ok()?;
        if directives.trim().is_empty() {
            return None;
        }
        EnvFilter::try_new(directives).ok()
    })
}
