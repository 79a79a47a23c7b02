//! Session entry structure

use super::log_level::LogLevel;
use super::timestamp::export_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted log call, as retained by the session store.
///
/// Field order matches every export format:
/// date, level, category, function name, content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    #[serde(with = "export_date")]
    pub date: DateTime<Utc>,
    pub log_level: LogLevel,
    pub category: String,
    pub function_name: String,
    pub content: String,
}

impl SessionEntry {
    pub fn new(
        date: DateTime<Utc>,
        log_level: LogLevel,
        category: impl Into<String>,
        function_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date,
            log_level,
            category: category.into(),
            function_name: function_name.into(),
            content: content.into(),
        }
    }

    /// Entry stamped with the current time
    pub fn now(
        log_level: LogLevel,
        category: impl Into<String>,
        function_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(Utc::now(), log_level, category, function_name, content)
    }
}
