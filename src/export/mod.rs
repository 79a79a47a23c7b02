//! Session history export
//!
//! Renders a sequence of [`SessionEntry`] as plain text, CSV, XML or JSON and
//! writes it to a file named after the application. Every format lists the
//! fields in the same order: date, level, category, function name, content.

pub mod csv;
pub mod json;
pub mod text;
pub mod xml;

use crate::core::{LoggerError, Result, SessionEntry, SessionStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogFileType {
    Text,
    Csv,
    Xml,
    Json,
}

impl LogFileType {
    pub const fn all() -> [LogFileType; 4] {
        [LogFileType::Text, LogFileType::Csv, LogFileType::Xml, LogFileType::Json]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            LogFileType::Text => "txt",
            LogFileType::Csv => "csv",
            LogFileType::Xml => "xml",
            LogFileType::Json => "json",
        }
    }

    /// Serialize `entries` in this format
    pub fn render(&self, entries: &[SessionEntry]) -> Result<Vec<u8>> {
        match self {
            LogFileType::Text => Ok(text::render(entries).into_bytes()),
            LogFileType::Csv => csv::render(entries),
            LogFileType::Xml => Ok(xml::render(entries).into_bytes()),
            LogFileType::Json => json::render(entries),
        }
    }
}

/// Writes exports into one directory
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Exporter writing to the system temp directory
    pub fn temp() -> Self {
        Self::new(std::env::temp_dir())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Destination for `app_name` in `file_type`; the name only affects the path
    pub fn destination(&self, file_type: LogFileType, app_name: &str) -> PathBuf {
        let stem: String = app_name
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        self.directory
            .join(format!("{}_logs.{}", stem, file_type.extension()))
    }

    /// Write `entries` and return the file's location
    pub fn export(
        &self,
        entries: &[SessionEntry],
        file_type: LogFileType,
        app_name: &str,
    ) -> Result<PathBuf> {
        let content = file_type.render(entries)?;
        let path = self.destination(file_type, app_name);

        fs::write(&path, content).map_err(|e| {
            LoggerError::export(path.display().to_string(), e.to_string())
        })?;
        Ok(path)
    }

    /// Export a snapshot of `store`
    pub fn export_session(
        &self,
        store: &SessionStore,
        file_type: LogFileType,
        app_name: &str,
    ) -> Result<PathBuf> {
        self.export(&store.snapshot(), file_type, app_name)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::temp()
    }
}
