//! Per-identity logger cache
//!
//! A [`LoggerRegistry`] hands out exactly one [`Logger`] per identity. The
//! lookup and the construction of a missing logger happen under one lock, so
//! racing first calls for the same identity still build a single logger.

use super::{
    config::LevelResolver,
    logger::{Logger, LoggerBuilder},
    redaction::RedactionMode,
    session_store::SessionStore,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static GLOBAL_REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

/// Identity a logger is cached under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoggerKey {
    Type(TypeId),
    Category(String),
}

/// Settings applied to every logger the registry constructs
#[derive(Clone)]
pub struct LoggerDefaults {
    pub timestamp_format: TimestampFormat,
    /// `None` defers to the resolver
    pub redaction_mode: Option<RedactionMode>,
    pub sinks: Vec<Arc<dyn Sink>>,
    pub session: Arc<SessionStore>,
    pub resolver: LevelResolver,
}

impl LoggerDefaults {
    fn builder(&self, category: &str) -> LoggerBuilder {
        let mut builder = Logger::builder(category)
            .timestamp_format(self.timestamp_format.clone())
            .session_store(Arc::clone(&self.session))
            .resolver(self.resolver.clone());
        if let Some(mode) = self.redaction_mode {
            builder = builder.redaction_mode(mode);
        }
        for sink in &self.sinks {
            builder = builder.shared_sink(Arc::clone(sink));
        }
        builder
    }
}

impl Default for LoggerDefaults {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            redaction_mode: None,
            sinks: vec![Arc::new(ConsoleSink::new())],
            session: SessionStore::global(),
            resolver: LevelResolver::from_env(),
        }
    }
}

pub struct LoggerRegistry {
    loggers: Mutex<HashMap<LoggerKey, Arc<Logger>>>,
    defaults: LoggerDefaults,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::with_defaults(LoggerDefaults::default())
    }

    pub fn with_defaults(defaults: LoggerDefaults) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            defaults,
        }
    }

    /// Registry behind the [`Logging`] trait
    pub fn global() -> &'static LoggerRegistry {
        &GLOBAL_REGISTRY
    }

    /// Logger for type `T`, categorized by the type's short name
    pub fn get<T: ?Sized + 'static>(&self) -> Arc<Logger> {
        self.get_or_create(LoggerKey::Type(TypeId::of::<T>()), || {
            short_type_name(type_name::<T>())
        })
    }

    /// Logger for an explicit category name
    pub fn get_category(&self, category: &str) -> Arc<Logger> {
        self.get_or_create(LoggerKey::Category(category.to_string()), || {
            category.to_string()
        })
    }

    fn get_or_create(&self, key: LoggerKey, category: impl FnOnce() -> String) -> Arc<Logger> {
        let mut loggers = self.loggers.lock();
        let logger = loggers
            .entry(key)
            .or_insert_with(|| Arc::new(self.defaults.builder(&category()).build()));
        Arc::clone(logger)
    }

    pub fn len(&self) -> usize {
        self.loggers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.lock().is_empty()
    }

    pub fn defaults(&self) -> &LoggerDefaults {
        &self.defaults
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.len())
            .finish_non_exhaustive()
    }
}

/// Gives a type its own cached logger from the global registry.
///
/// # Example
///
/// ```
/// use parrot_logger::prelude::*;
///
/// struct SyncService;
/// impl Logging for SyncService {}
///
/// let service = SyncService;
/// assert_eq!(service.logger().category(), "SyncService");
/// ```
pub trait Logging: 'static {
    fn logger(&self) -> Arc<Logger> {
        LoggerRegistry::global().get::<Self>()
    }
}

/// `alloc::vec::Vec<app::Job>` becomes `Vec<Job>`, `app::net::Client` becomes `Client`
fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*') {
            short.push_str(last_segment(&full[start..i]));
            short.push(c);
            start = i + c.len_utf8();
        }
    }
    short.push_str(last_segment(&full[start..]));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
