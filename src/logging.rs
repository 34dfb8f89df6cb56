//! Logger bootstrap.
//!
//! Records go to stderr as `event=... key=value` lines so stdout stays
//! clean for command output. The level comes from `MEMO_CALENDAR_LOG`.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;

pub const LOG_ENV: &str = "MEMO_CALENDAR_LOG";
const DEFAULT_LEVEL: &str = "warn";

pub fn level_from_env() -> String {
    level_from(std::env::var(LOG_ENV).ok())
}

/// Resolve the level spec, falling back to `warn` for unset or blank.
pub fn level_from(raw: Option<String>) -> String {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Start the stderr logger. The returned handle must stay alive for the
/// duration of the command.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;
    debug!(
        "event=app_start module=cli status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
