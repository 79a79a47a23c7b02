//! Level configuration from environment-style keys
//!
//! - `LOG_LEVEL` sets the global default level.
//! - `LOG_LEVEL_<CATEGORY>` overrides it for one category (category name
//!   uppercased).
//! - `LOG_REVEAL_SENSITIVE` turns redaction off.
//!
//! Malformed values are never fatal: they are reported on stderr and the next
//! configuration source is used instead.

use super::error::LoggerError;
use super::log_level::LogLevel;
use super::redaction::RedactionMode;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const GLOBAL_LEVEL_KEY: &str = "LOG_LEVEL";
pub const REVEAL_SENSITIVE_KEY: &str = "LOG_REVEAL_SENSITIVE";

/// Level used when no source configures one
pub const FALLBACK_LEVEL: LogLevel = LogLevel::Trace;

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Key for a category-specific level
pub fn category_level_key(category: &str) -> String {
    format!("{}_{}", GLOBAL_LEVEL_KEY, category.to_uppercase())
}

/// Resolves logger levels from a key/value source
#[derive(Clone)]
pub struct LevelResolver {
    lookup: Lookup,
}

impl LevelResolver {
    /// Resolver reading the process environment
    pub fn from_env() -> Self {
        Self::from_fn(|key| std::env::var(key).ok())
    }

    /// Resolver over fixed pairs, independent of the environment
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::from_fn(move |key| map.get(key).cloned())
    }

    pub fn from_fn<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Global default level; invalid or absent values resolve to [`FALLBACK_LEVEL`]
    pub fn global_level(&self) -> LogLevel {
        match (self.lookup)(GLOBAL_LEVEL_KEY) {
            Some(raw) => parse_level(GLOBAL_LEVEL_KEY, &raw).unwrap_or_else(|err| {
                report_warning(&err, &format!("using {} as fallback", FALLBACK_LEVEL));
                FALLBACK_LEVEL
            }),
            None => FALLBACK_LEVEL,
        }
    }

    /// Category override; invalid values count as no override
    pub fn category_level(&self, category: &str) -> Option<LogLevel> {
        let key = category_level_key(category);
        let raw = (self.lookup)(&key)?;
        match parse_level(&key, &raw) {
            Ok(level) => Some(level),
            Err(err) => {
                report_warning(&err, "ignoring category override");
                None
            }
        }
    }

    /// Effective level: explicit, then category override, then global default
    pub fn resolve(&self, explicit: Option<LogLevel>, category: &str) -> LogLevel {
        let from_category = self.category_level(category);
        if let (Some(explicit), Some(configured)) = (explicit, from_category) {
            eprintln!(
                "[LOGGER NOTICE] Level {} given for '{}' overrides {}={}",
                explicit,
                category,
                category_level_key(category),
                configured
            );
        }

        explicit
            .or(from_category)
            .unwrap_or_else(|| self.global_level())
    }

    /// Redaction switch; absent or invalid means [`RedactionMode::Redact`]
    pub fn redaction_mode(&self) -> RedactionMode {
        let Some(raw) = (self.lookup)(REVEAL_SENSITIVE_KEY) else {
            return RedactionMode::default();
        };
        RedactionMode::from_flag(&raw).unwrap_or_else(|| {
            let err = LoggerError::config(REVEAL_SENSITIVE_KEY, format!("unknown switch '{}'", raw));
            report_warning(&err, "keeping redaction on");
            RedactionMode::default()
        })
    }
}

impl Default for LevelResolver {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for LevelResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelResolver").finish_non_exhaustive()
    }
}

fn parse_level(key: &str, raw: &str) -> Result<LogLevel, LoggerError> {
    raw.parse::<LogLevel>()
        .map_err(|message| LoggerError::config(key, message))
}

fn report_warning(err: &LoggerError, action: &str) {
    eprintln!("[LOGGER WARNING] {}, {}", err, action);
}
