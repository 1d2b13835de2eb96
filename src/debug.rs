/// Diagnostic logging for fc-char
///
/// All `log::debug!()` / `log::info!()` etc. calls are routed to stderr as
/// `[timestamp] [LEVEL] [target] message` lines. stdout stays reserved for
/// the name, annotation and font list output.
///
/// Controlled by `--debug` and the FC_CHAR_LOG environment variable:
/// - unset, no `--debug`: silent (fatal errors are printed by `main`)
/// - `--debug`: debug level
/// - FC_CHAR_LOG=off|error|warn|info|debug|trace: overrides both
use std::io::Write;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable overriding the log level
pub const LOG_ENV_VAR: &str = "FC_CHAR_LOG";

/// Crate prefix whose records pass at the configured level. Records from
/// dependencies (winit, wgpu, fontdb) only pass at warn or above.
const OWN_TARGET_PREFIX: &str = "fc_char";

struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn level_for(&self, target: &str) -> LevelFilter {
        if target.starts_with(OWN_TARGET_PREFIX) {
            self.level
        } else {
            self.level.min(LevelFilter::Warn)
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a level name as accepted by FC_CHAR_LOG.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Pick the log level from the environment override and `--debug`.
pub fn resolve_level(env_value: Option<&str>, debug: bool) -> LevelFilter {
    if let Some(level) = env_value.and_then(parse_level) {
        return level;
    }
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}

/// Install the stderr logger. Later calls keep the first logger.
pub fn init_log_bridge(debug: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(env_value.as_deref(), debug);

    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}

/// Check if records of `level` from this crate would be written
pub fn is_enabled(level: log::Level) -> bool {
    level <= log::max_level()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        assert_eq!(resolve_level(Some("trace"), false), LevelFilter::Trace);
        assert_eq!(resolve_level(Some("off"), true), LevelFilter::Off);
    }

    #[test]
    fn test_debug_flag() {
        assert_eq!(resolve_level(None, true), LevelFilter::Debug);
        assert_eq!(resolve_level(None, false), LevelFilter::Off);
        assert_eq!(resolve_level(Some("bogus"), true), LevelFilter::Debug);
    }

    #[test]
    fn test_dependency_records_are_capped_at_warn() {
        let logger = StderrLogger {
            level: LevelFilter::Debug,
        };
        assert_eq!(logger.level_for("fc_char::layout"), LevelFilter::Debug);
        assert_eq!(logger.level_for("fc_char_fonts::font_catalog"), LevelFilter::Debug);
        assert_eq!(logger.level_for("wgpu_core::device"), LevelFilter::Warn);
    }
}
