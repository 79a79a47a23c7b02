//! Sink trait for display-line destinations

use super::{error::Result, log_level::LogLevel};

/// Destination for fully formatted display lines.
///
/// Sinks are shared between loggers, so writes take `&self`; implementations
/// synchronize internally.
pub trait Sink: Send + Sync {
    fn write_line(&self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
