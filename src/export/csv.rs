//! CSV export with a `Date,LogLevel,Category,FunctionName,Content` header

use crate::core::{LoggerError, Result, SessionEntry, EXPORT_TIMESTAMP_FORMAT};
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

pub const HEADER: [&str; 5] = ["Date", "LogLevel", "Category", "FunctionName", "Content"];

pub fn render(entries: &[SessionEntry]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for entry in entries {
        writer.write_record([
            EXPORT_TIMESTAMP_FORMAT.format(&entry.date).as_str(),
            entry.log_level.to_str(),
            entry.category.as_str(),
            entry.function_name.as_str(),
            entry.content.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| LoggerError::io_operation("finishing CSV export", "buffer flush failed", e.into_error()))
}
