mod init;
pub use init::{init_logging, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used when file logging is enabled.
pub const LOG_FILENAME: &str = "githost.log";
/// Configuration for the logging system.
///
/// Logs go to stderr so that stdout only carries resolved URLs. When
/// `log_dir` is set, a rotating log file is written there as well.
pub struct LogConfig {
    pub log_dir: Option<PathBuf>,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::WARN,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
