//! JSON export: an array of `{date, logLevel, category, functionName, content}`

use crate::core::{Result, SessionEntry};

pub fn render(entries: &[SessionEntry]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(entries)?)
}

/// Decode a JSON export back into entries
pub fn parse(bytes: &[u8]) -> Result<Vec<SessionEntry>> {
    Ok(serde_json::from_slice(bytes)?)
}
