//! Main logger implementation

use super::{
    config::LevelResolver,
    log_level::LogLevel,
    message::{MessageBuilder, MessageTemplate},
    metrics::LoggerMetrics,
    redaction::RedactionMode,
    session_entry::SessionEntry,
    session_store::SessionStore,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Category-scoped logger.
///
/// The effective level is resolved once at construction and never changes.
/// Every accepted call writes one display line to each sink and appends one
/// [`SessionEntry`] to the session store; filtered calls have no side effects
/// besides the filtered counter.
///
/// # Example
///
/// ```
/// use parrot_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder("Net")
///     .level(LogLevel::Warning)
///     .shared_sink(sink.clone())
///     .session_store(Arc::new(SessionStore::new()))
///     .build();
///
/// assert!(logger.info("connected", "main").is_none());
/// assert!(logger.error("timeout", "main").is_some());
/// assert_eq!(sink.len(), 1);
/// ```
pub struct Logger {
    category: String,
    level: LogLevel,
    timestamp_format: TimestampFormat,
    message_builder: MessageBuilder,
    sinks: Vec<Arc<dyn Sink>>,
    session: Arc<SessionStore>,
    metrics: LoggerMetrics,
}

/// Generates the per-level entry points
macro_rules! level_methods {
    ($($level:ident => $plain:ident, $redacted:ident;)*) => {
        $(
            #[inline]
            pub fn $plain(&self, item: impl fmt::Display, function_name: &str) -> Option<String> {
                self.log_plain(Some(LogLevel::$level), item, function_name)
            }

            #[inline]
            pub fn $redacted(&self, template: &MessageTemplate, function_name: &str) -> Option<String> {
                self.log_with_policy(Some(LogLevel::$level), template, function_name)
            }
        )*
    };
}

impl Logger {
    /// Logger for `category` configured from the process environment
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self::builder(category).build()
    }

    #[must_use]
    pub fn builder(category: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(category)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Effective minimum level
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn redaction_mode(&self) -> RedactionMode {
        self.message_builder.mode()
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn session_store(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Log the `Display` form of `item` as-is.
    ///
    /// `level` of `None` logs at this logger's own level. Returns the display
    /// line, or `None` when the call was filtered.
    pub fn log_plain(
        &self,
        level: Option<LogLevel>,
        item: impl fmt::Display,
        function_name: &str,
    ) -> Option<String> {
        let level = level.unwrap_or(self.level);
        if !self.accept(level) {
            return None;
        }
        Some(self.record(level, item.to_string(), function_name))
    }

    /// Log a template, redacting its values under this logger's mode.
    ///
    /// Same filtering and return contract as [`Logger::log_plain`]; filtered
    /// templates are never rendered.
    pub fn log_with_policy(
        &self,
        level: Option<LogLevel>,
        template: &MessageTemplate,
        function_name: &str,
    ) -> Option<String> {
        let level = level.unwrap_or(self.level);
        if !self.accept(level) {
            return None;
        }
        let content = self.message_builder.build(template);
        Some(self.record(level, content, function_name))
    }

    level_methods! {
        Trace => trace, trace_redacted;
        Debug => debug, debug_redacted;
        Info => info, info_redacted;
        Notice => notice, notice_redacted;
        Warning => warning, warning_redacted;
        Error => error, error_redacted;
        Critical => critical, critical_redacted;
    }

    fn accept(&self, level: LogLevel) -> bool {
        if self.is_enabled(level) {
            true
        } else {
            self.metrics.record_filtered();
            false
        }
    }

    fn record(&self, level: LogLevel, content: String, function_name: &str) -> String {
        let date = Utc::now();
        let line = self.format_line(&date, level, function_name, &content);

        self.write_sinks(level, &line);

        self.session.append(SessionEntry {
            date,
            log_level: level,
            category: self.category.clone(),
            function_name: function_name.to_string(),
            content,
        });
        self.metrics.record_logged();

        line
    }

    /// `<date> <label> [<category> <function>] <content>`
    fn format_line(
        &self,
        date: &DateTime<Utc>,
        level: LogLevel,
        function_name: &str,
        content: &str,
    ) -> String {
        let separator = if function_name.is_empty() { "" } else { " " };
        format!(
            "{} {} [{}{}{}] {}",
            self.timestamp_format.format(date),
            level.aligned_label(),
            self.category,
            separator,
            function_name,
            content
        )
    }

    /// Write to every sink with per-sink panic isolation
    fn write_sinks(&self, level: LogLevel, line: &str) {
        for sink in &self.sinks {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.write_line(level, line)
            }));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                    self.metrics.record_sink_failure();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        sink.name(),
                        panic_msg
                    );
                    self.metrics.record_sink_failure();
                }
            }
        }
    }

    /// Flush every sink, stopping at the first failure
    pub fn flush(&self) -> super::error::Result<()> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks: Vec<&str> = self.sinks.iter().map(|sink| sink.name()).collect();
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("level", &self.level)
            .field("timestamp_format", &self.timestamp_format)
            .field("redaction_mode", &self.message_builder.mode())
            .field("sinks", &sinks)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// Anything left unset is taken from the resolver (level, redaction mode) or
/// from process-wide defaults (console sink, global session store).
///
/// # Example
/// ```
/// use parrot_logger::prelude::*;
///
/// let logger = Logger::builder("Payments")
///     .level(LogLevel::Info)
///     .redaction_mode(RedactionMode::Redact)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .sink(MemorySink::new())
///     .build();
///
/// assert_eq!(logger.level(), LogLevel::Info);
/// ```
pub struct LoggerBuilder {
    category: String,
    level: Option<LogLevel>,
    timestamp_format: TimestampFormat,
    redaction_mode: Option<RedactionMode>,
    sinks: Vec<Arc<dyn Sink>>,
    session: Option<Arc<SessionStore>>,
    resolver: Option<LevelResolver>,
}

impl LoggerBuilder {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            level: None,
            timestamp_format: TimestampFormat::default(),
            redaction_mode: None,
            sinks: Vec::new(),
            session: None,
            resolver: None,
        }
    }

    /// Explicit level, taking priority over any configured one
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn redaction_mode(mut self, mode: RedactionMode) -> Self {
        self.redaction_mode = Some(mode);
        self
    }

    /// Add a sink owned by this logger
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Add a sink shared with other loggers
    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn session_store(mut self, store: Arc<SessionStore>) -> Self {
        self.session = Some(store);
        self
    }

    /// Source for configured levels; defaults to the process environment
    #[must_use = "builder methods return a new value"]
    pub fn resolver(mut self, resolver: LevelResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn build(self) -> Logger {
        let resolver = self.resolver.unwrap_or_else(LevelResolver::from_env);
        let level = resolver.resolve(self.level, &self.category);
        let redaction_mode = self
            .redaction_mode
            .unwrap_or_else(|| resolver.redaction_mode());

        let sinks = if self.sinks.is_empty() {
            vec![Arc::new(ConsoleSink::new()) as Arc<dyn Sink>]
        } else {
            self.sinks
        };

        Logger {
            category: self.category,
            level,
            timestamp_format: self.timestamp_format,
            message_builder: MessageBuilder::new(redaction_mode),
            sinks,
            session: self.session.unwrap_or_else(SessionStore::global),
            metrics: LoggerMetrics::new(),
        }
    }
}
