use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// `-v` count to log level. `RUST_LOG` still overrides it.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Starts logging to stderr. Keep the handle alive for the whole run.
pub fn init_logging(verbose: u8) -> Result<LoggerHandle> {
    let level = level_for(verbose);
    Logger::try_with_env_or_str(level)
        .with_context(|| format!("invalid log level `{level}`"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("starting logger")
}
