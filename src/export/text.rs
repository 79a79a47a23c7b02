//! Plain-text export
//!
//! One line per entry, fields joined by ` - `, a blank line between entries.
//! A field is wrapped in double quotes, inner quotes doubled, when it is empty,
//! contains the separator, a quote or a line break, or starts or ends with a
//! space or `-`. Anything else could merge with a neighbouring separator, so
//! with this rule [`split_fields`] recovers every record exactly.

use crate::core::{SessionEntry, EXPORT_TIMESTAMP_FORMAT};

pub const FIELD_SEPARATOR: &str = " - ";

pub fn render(entries: &[SessionEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let fields = [
                EXPORT_TIMESTAMP_FORMAT.format(&entry.date),
                escape(entry.log_level.to_str()),
                escape(&entry.category),
                escape(&entry.function_name),
                escape(&entry.content),
            ];
            format!("{}\n", fields.join(FIELD_SEPARATOR))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape(value: &str) -> String {
    let edge = |c: char| c == ' ' || c == '-';
    let needs_quotes = value.is_empty()
        || value.starts_with(edge)
        || value.ends_with(edge)
        || value.contains(FIELD_SEPARATOR)
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits one rendered record (without its trailing newline) back into fields
///
/// Returns `None` when a quoted field is unterminated or a separator is missing.
pub fn split_fields(record: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut rest = record;
    loop {
        let (field, tail) = match rest.strip_prefix('"') {
            Some(quoted) => {
                let mut value = String::new();
                let mut chars = quoted.char_indices();
                let end = loop {
                    let (i, c) = chars.next()?;
                    if c != '"' {
                        value.push(c);
                    } else if quoted[i + 1..].starts_with('"') {
                        value.push('"');
                        chars.next();
                    } else {
                        break i + 1;
                    }
                };
                (value, &quoted[end..])
            }
            None => match rest.find(FIELD_SEPARATOR) {
                Some(i) => (rest[..i].to_string(), &rest[i..]),
                None => (rest.to_string(), ""),
            },
        };
        fields.push(field);
        if tail.is_empty() {
            return Some(fields);
        }
        rest = tail.strip_prefix(FIELD_SEPARATOR)?;
    }
}
