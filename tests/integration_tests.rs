//! Integration tests for parrot_logger
//!
//! These tests verify:
//! - Level resolution from configuration
//! - Filtering and session recording through the public API
//! - Redacted messages end to end
//! - File sinks
//! - Export of session history in every format

use chrono::{TimeZone, Utc};
use parrot_logger::export::json;
use parrot_logger::prelude::*;
use parrot_logger::{error, info};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn sample_entries() -> Vec<SessionEntry> {
    let date = Utc.with_ymd_and_hms(2025, 5, 15, 14, 3, 7).single().expect("valid datetime")
        + chrono::Duration::nanoseconds(123_456_789);
    vec![
        SessionEntry::new(date, LogLevel::Info, "Category 1", "Function 1", "Log message 1"),
        SessionEntry::new(date, LogLevel::Warning, "Category 2", "Function 2", "Log message 2"),
        SessionEntry::new(date, LogLevel::Error, "Category3", "Function3", "Log entry 3"),
    ]
}

#[test]
fn test_global_warning_level_scenario() {
    let sink = Arc::new(MemorySink::new());
    let store = Arc::new(SessionStore::new());
    let logger = Logger::builder("Net")
        .resolver(LevelResolver::from_pairs([("LOG_LEVEL", "warning")]))
        .shared_sink(sink.clone())
        .session_store(Arc::clone(&store))
        .build();

    assert!(info!(logger, "connected").is_none());
    assert!(sink.is_empty());
    assert!(store.is_empty());

    assert!(error!(logger, "timeout").is_some());
    let entries = store.snapshot();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].log_level, LogLevel::Error);
    assert_eq!(entries[0].category, "Net");
    assert_eq!(entries[0].content, "timeout");
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_registry_resolves_category_levels() {
    let registry = LoggerRegistry::with_defaults(LoggerDefaults {
        sinks: vec![Arc::new(MemorySink::new())],
        session: Arc::new(SessionStore::new()),
        resolver: LevelResolver::from_pairs([
            ("LOG_LEVEL", "notice"),
            ("LOG_LEVEL_DISK", "critical"),
            ("LOG_LEVEL_CACHE", "nonsense"),
        ]),
        ..LoggerDefaults::default()
    });

    assert_eq!(registry.get_category("Disk").level(), LogLevel::Critical);
    assert_eq!(registry.get_category("Cache").level(), LogLevel::Notice);
    assert_eq!(registry.get_category("Net").level(), LogLevel::Notice);
}

#[test]
fn test_redacted_message_never_reaches_sinks_in_clear() {
    let sink = Arc::new(MemorySink::new());
    let store = Arc::new(SessionStore::new());
    let logger = Logger::builder("Auth")
        .level(LogLevel::Trace)
        .redaction_mode(RedactionMode::Redact)
        .shared_sink(sink.clone())
        .session_store(Arc::clone(&store))
        .build();

    let template = MessageTemplate::new()
        .literal("user ")
        .value("alice@example.com", Privacy::prefix(5))
        .literal(" password ")
        .value("hunter2", Privacy::masked())
        .literal(" token ")
        .value("tok_live_abc", Privacy::hide());

    logger.info_redacted(&template, "login");

    let expected = "user alice... password ******* token <private>";
    assert_eq!(store.latest().map(|e| e.content), Some(expected.to_string()));
    let line = &sink.lines()[0];
    assert!(line.ends_with(expected));
    assert!(!line.contains("hunter2"));
    assert!(!line.contains("tok_live_abc"));
}

#[test]
fn test_file_sink_receives_display_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("session.log");

    let logger = Logger::builder("Worker")
        .level(LogLevel::Info)
        .sink(FileSink::new(&log_file).expect("Failed to create sink"))
        .session_store(Arc::new(SessionStore::new()))
        .build();

    logger.debug("skipped", "run");
    logger.info("job 1 done", "run");
    logger.critical("out of memory", "run");
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[Worker run] job 1 done"));
    assert!(lines[1].contains("CRITICAL"));
}

#[test]
fn test_subscriber_wakes_and_reads_latest() {
    let store = Arc::new(SessionStore::new());
    let subscription = store.subscribe();
    let logger = Logger::builder("Ui")
        .level(LogLevel::Trace)
        .sink(MemorySink::new())
        .session_store(Arc::clone(&store))
        .build();

    let handle = std::thread::spawn(move || {
        logger.notice("refresh", "tick");
    });

    assert!(subscription.recv_timeout(Duration::from_secs(5)));
    handle.join().expect("logger thread panicked");
    assert_eq!(store.latest().map(|e| e.content), Some("refresh".to_string()));
}

#[test]
fn test_export_csv_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let date = Utc::now();
    let entries = vec![
        SessionEntry::new(date, LogLevel::Info, "Cat1", "Fn1", "msg1"),
        SessionEntry::new(date, LogLevel::Warning, "Cat2", "Fn2", "msg2"),
    ];

    let path = Exporter::new(temp_dir.path())
        .export(&entries, LogFileType::Csv, "MyApp")
        .expect("Failed to export");

    let content = fs::read_to_string(path).expect("Failed to read export");
    let lines: Vec<&str> = content.lines().collect();
    let stamp = TimestampFormat::Iso8601Precise.format(&date);
    assert_eq!(
        lines,
        vec![
            "Date,LogLevel,Category,FunctionName,Content".to_string(),
            format!("{stamp},info,Cat1,Fn1,msg1"),
            format!("{stamp},warning,Cat2,Fn2,msg2"),
        ]
    );
}

#[test]
fn test_export_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let entries = sample_entries();

    let path = Exporter::new(temp_dir.path())
        .export(&entries, LogFileType::Text, "MyApp")
        .expect("Failed to export");

    let expected = entries
        .iter()
        .map(|entry| {
            format!(
                "{} - {} - {} - {} - {}\n",
                TimestampFormat::Iso8601Precise.format(&entry.date),
                entry.log_level,
                entry.category,
                entry.function_name,
                entry.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(fs::read_to_string(path).expect("Failed to read export"), expected);
}

#[test]
fn test_export_xml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let entries = sample_entries();

    let path = Exporter::new(temp_dir.path())
        .export(&entries, LogFileType::Xml, "MyApp")
        .expect("Failed to export");
    let content = fs::read_to_string(path).expect("Failed to read export");

    let compact: String = content.split_whitespace().collect();
    let mut expected = String::from(r#"<?xmlversion="1.0"encoding="UTF-8"?><logs>"#);
    for entry in &entries {
        expected.push_str(&format!(
            "<log><date>{}</date><logLevel>{}</logLevel><category>{}</category>\
             <functionName>{}</functionName><content>{}</content></log>",
            TimestampFormat::Iso8601Precise.format(&entry.date),
            entry.log_level,
            entry.category.replace(' ', ""),
            entry.function_name.replace(' ', ""),
            entry.content.replace(' ', ""),
        ));
    }
    expected.push_str("</logs>");
    assert_eq!(compact, expected);
}

#[test]
fn test_export_json_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let entries = sample_entries();

    let path = Exporter::new(temp_dir.path())
        .export(&entries, LogFileType::Json, "MyApp")
        .expect("Failed to export");

    let decoded = json::parse(&fs::read(path).expect("Failed to read export"))
        .expect("Failed to decode export");
    assert_eq!(decoded, entries);
}

#[test]
fn test_export_live_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(SessionStore::new());
    let logger = Logger::builder("Sync")
        .level(LogLevel::Trace)
        .sink(MemorySink::new())
        .session_store(Arc::clone(&store))
        .build();

    logger.info("a, b and \"c\"", "start");
    logger.error("failed", "finish");

    let path = Exporter::new(temp_dir.path())
        .export_session(&store, LogFileType::Json, "Sync App")
        .expect("Failed to export");
    assert!(path.ends_with("Sync App_logs.json"));

    let decoded = json::parse(&fs::read(path).expect("Failed to read export"))
        .expect("Failed to decode export");
    assert_eq!(decoded, store.snapshot());
    assert_eq!(decoded[0].content, "a, b and \"c\"");
}
