// Logging context. Built once by the binary from `--loglevel` and kept for
// the lifetime of the process. Output goes to stderr so stdout only ever
// carries paste content and the create report.

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter directives for `level`: our own crates log at `level`, everything
/// else (reqwest, hyper) is capped at warn.
pub fn filter_directives(level: LogLevel) -> String {
    let ours = level.as_level().to_string().to_ascii_lowercase();
    let others = match level {
        LogLevel::Error => "error",
        _ => "warn",
    };
    format!("{others},cxg={ours},cxg_cli={ours}")
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(level: LogLevel) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_env_filter(EnvFilter::new(filter_directives(level)))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
