//! Stress tests for shared state under concurrency
//!
//! These tests verify:
//! - Racing first lookups build exactly one logger per identity
//! - Concurrent appends are neither lost nor reordered within a thread
//! - Slow or absent subscribers never stall logging threads

use parrot_logger::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

const THREADS: usize = 16;
const PER_THREAD: usize = 500;

fn isolated_registry() -> LoggerRegistry {
    LoggerRegistry::with_defaults(LoggerDefaults {
        sinks: vec![Arc::new(MemorySink::new())],
        session: Arc::new(SessionStore::new()),
        resolver: LevelResolver::from_pairs(Vec::<(String, String)>::new()),
        ..LoggerDefaults::default()
    })
}

struct SharedService;

#[test]
fn test_concurrent_first_lookup_builds_one_logger() {
    for _ in 0..20 {
        let registry = Arc::new(isolated_registry());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.get::<SharedService>()
                })
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles
            .into_iter()
            .map(|h| h.join().expect("lookup thread panicked"))
            .collect();

        assert_eq!(registry.len(), 1);
        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
    }
}

#[test]
fn test_concurrent_category_lookup() {
    let registry = Arc::new(isolated_registry());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_category(if i % 2 == 0 { "Even" } else { "Odd" })
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("lookup thread panicked");
    }
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_concurrent_appends_keep_per_thread_order() {
    let store = Arc::new(SessionStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let logger = Logger::builder(format!("T{t}"))
                    .level(LogLevel::Trace)
                    .sink(MemorySink::new())
                    .session_store(store)
                    .build();
                barrier.wait();
                for i in 0..PER_THREAD {
                    logger.debug(i, "worker");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let entries = store.snapshot();
    assert_eq!(entries.len(), THREADS * PER_THREAD);

    let mut next: HashMap<String, usize> = HashMap::new();
    for entry in &entries {
        let expected = next.entry(entry.category.clone()).or_insert(0);
        assert_eq!(entry.content, expected.to_string(), "out of order in {}", entry.category);
        *expected += 1;
    }
    assert!(next.values().all(|count| *count == PER_THREAD));
}

#[test]
fn test_unread_subscribers_do_not_block_logging() {
    let store = Arc::new(SessionStore::new());
    let _idle: Vec<Subscription> = (0..8).map(|_| store.subscribe()).collect();

    let logger = Logger::builder("Burst")
        .level(LogLevel::Trace)
        .sink(MemorySink::new())
        .session_store(Arc::clone(&store))
        .build();

    let start = Instant::now();
    for i in 0..10_000 {
        logger.trace(i, "burst");
    }

    assert_eq!(store.len(), 10_000);
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[test]
fn test_snapshot_while_appending() {
    let store = Arc::new(SessionStore::new());
    let writer_store = Arc::clone(&store);

    let writer = thread::spawn(move || {
        let logger = Logger::builder("Writer")
            .level(LogLevel::Trace)
            .sink(MemorySink::new())
            .session_store(writer_store)
            .build();
        for i in 0..2_000 {
            logger.info(i, "write");
        }
    });

    let mut last_len = 0;
    while !writer.is_finished() {
        let snapshot = store.snapshot();
        assert!(snapshot.len() >= last_len);
        if let Some(last) = snapshot.last() {
            assert_eq!(last.content, (snapshot.len() - 1).to_string());
        }
        last_len = snapshot.len();
    }
    writer.join().expect("writer panicked");
    assert_eq!(store.len(), 2_000);
}
