//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and fill in the name of
//! the calling function, so call sites read like `println!`.
//!
//! # Examples
//!
//! ```
//! use parrot_logger::prelude::*;
//! use parrot_logger::{info, warning};
//!
//! let logger = Logger::builder("Server").sink(MemorySink::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! warning!(logger, "Port {} already in use, retrying", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// Inside closures the name of the function defining the closure is used.
///
/// ```
/// fn handle_request() -> &'static str {
///     parrot_logger::function_name!()
/// }
/// assert_eq!(handle_request(), "handle_request");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

/// Log a message at an explicit level.
///
/// ```
/// # use parrot_logger::prelude::*;
/// # let logger = Logger::builder("Demo").sink(MemorySink::new()).build();
/// use parrot_logger::log;
/// log!(logger, LogLevel::Notice, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_plain(Some($level), format!($($arg)+), $crate::function_name!())
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
