//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod redaction;
pub mod registry;
pub mod session_entry;
pub mod session_store;
pub mod sink;
pub mod timestamp;

pub use config::LevelResolver;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::{MessageBuilder, MessageTemplate, Segment};
pub use metrics::LoggerMetrics;
pub use redaction::{Privacy, RedactionMode, Sensitivity};
pub use registry::{LoggerDefaults, LoggerKey, LoggerRegistry, Logging};
pub use session_entry::SessionEntry;
pub use session_store::{SessionStore, Subscription};
pub use sink::Sink;
pub use timestamp::{TimestampFormat, EXPORT_TIMESTAMP_FORMAT};
