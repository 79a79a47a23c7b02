//! XML export: a `<logs>` root with one `<log>` element per entry

use crate::core::{SessionEntry, EXPORT_TIMESTAMP_FORMAT};

pub const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub fn render(entries: &[SessionEntry]) -> String {
    let mut out = String::from(PROLOG);
    out.push_str("\n<logs>\n");
    for entry in entries {
        out.push_str("  <log>\n");
        push_element(&mut out, "date", &EXPORT_TIMESTAMP_FORMAT.format(&entry.date));
        push_element(&mut out, "logLevel", entry.log_level.to_str());
        push_element(&mut out, "category", &entry.category);
        push_element(&mut out, "functionName", &entry.function_name);
        push_element(&mut out, "content", &entry.content);
        out.push_str("  </log>\n");
    }
    out.push_str("</logs>\n");
    out
}

fn push_element(out: &mut String, name: &str, value: &str) {
    out.push_str("    <");
    out.push_str(name);
    out.push('>');
    out.push_str(&escape(value));
    out.push_str("</");
    out.push_str(name);
    out.push_str(">\n");
}

/// Escapes markup characters and writes `\r` as a character reference so
/// parsers do not normalize it away. Characters XML 1.0 forbids become U+FFFD.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\r' => escaped.push_str("&#xD;"),
            '\t' | '\n' => escaped.push(c),
            c if is_forbidden(c) => escaped.push(char::REPLACEMENT_CHARACTER),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn is_forbidden(c: char) -> bool {
    c < '\u{20}' || c == '\u{FFFE}' || c == '\u{FFFF}'
}
