//! # Parrot Logger
//!
//! Category-scoped structured logging with field-level redaction, an
//! in-memory session history and file export.
//!
//! ## Features
//!
//! - **Leveled filtering**: seven ordered levels, resolved per category from
//!   `LOG_LEVEL` / `LOG_LEVEL_<CATEGORY>` or set explicitly
//! - **Redaction at formatting time**: interpolated values carry a privacy
//!   rule (prefix, suffix, hash, mask, hide)
//! - **Session history**: every accepted entry is kept in a thread-safe store
//!   with change subscriptions
//! - **Export**: plain text, CSV, XML and JSON
//!
//! ## Example
//!
//! ```
//! use parrot_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(SessionStore::new());
//! let logger = Logger::builder("Auth")
//!     .level(LogLevel::Info)
//!     .sink(MemorySink::new())
//!     .session_store(Arc::clone(&store))
//!     .build();
//!
//! let template = MessageTemplate::new()
//!     .literal("login for ")
//!     .value("alice@example.com", Privacy::prefix(3));
//! logger.info_redacted(&template, "login");
//!
//! assert_eq!(store.latest().unwrap().content, "login for ali...");
//! ```

pub mod core;
pub mod export;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LevelResolver, LogLevel, Logger, LoggerBuilder, LoggerDefaults, LoggerError,
        LoggerMetrics, LoggerRegistry, Logging, MessageBuilder, MessageTemplate, Privacy,
        RedactionMode, Result, Sensitivity, SessionEntry, SessionStore, Sink, Subscription,
        TimestampFormat,
    };
    pub use crate::export::{Exporter, LogFileType};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use core::{
    LevelResolver, LogLevel, Logger, LoggerBuilder, LoggerDefaults, LoggerError, LoggerMetrics,
    LoggerRegistry, Logging, MessageBuilder, MessageTemplate, Privacy, RedactionMode, Result,
    Sensitivity, SessionEntry, SessionStore, Sink, Subscription, TimestampFormat,
};
pub use export::{Exporter, LogFileType};
pub use sinks::{ConsoleSink, FileSink, MemorySink};
