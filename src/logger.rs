//! logger
//!
//! Injectable leveled logging capability.
//!
//! # Overview
//!
//! Nothing in the container core logs; this module defines the capability
//! other components accept by injection (a `&dyn Logger` or generic
//! parameter), never as ambient global state. `format_args!` collapses
//! the plain/formatted call shapes into one `log` entry point, and
//! `tracing` spans cover context propagation for the bridge.
//!
//! Two implementations ship:
//!
//! - [`WriteLogger`] - level-filtered output to any `io::Write`
//! - [`TracingBridge`] - forwards into the `tracing` ecosystem
//!
//! # Example
//!
//! ```
//! use dotmap::logger::{Level, Logger, WriteLogger};
//!
//! let logger = WriteLogger::new(Level::Info, Box::new(std::io::sink()));
//! logger.info(format_args!("cache warmed with {} entries", 12));
//! logger.debug(format_args!("filtered out below Info"));
//! ```

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

/// Priority of a log message.
///
/// A logger configured with a level suppresses messages of lower levels
/// (smaller by integer comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Notice,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// The bracketed label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Level::Trace => "[Trace]",
            Level::Debug => "[Debug]",
            Level::Info => "[Info]",
            Level::Notice => "[Notice]",
            Level::Warn => "[Warn]",
            Level::Error => "[Error]",
            Level::Fatal => "[Fatal]",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Leveled logging capability.
///
/// `log` is the single required method; the leveled methods are
/// conveniences over it. Pass messages with `format_args!`.
pub trait Logger {
    /// Emit one message at the given level.
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    fn trace(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Trace, message);
    }

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message);
    }

    fn notice(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Notice, message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message);
    }

    fn fatal(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Fatal, message);
    }
}

/// Runtime configuration of a logger.
pub trait LogControl {
    /// Suppress messages below `level`.
    fn set_level(&mut self, level: Level);

    /// Redirect output.
    fn set_output(&mut self, output: Box<dyn Write + Send>);
}

/// Logger writing `[Level] message` lines to an `io::Write`.
///
/// Write failures are swallowed; logging never becomes a failure path of
/// the code that logs.
pub struct WriteLogger {
    level: Level,
    output: Mutex<Box<dyn Write + Send>>,
}

impl WriteLogger {
    /// Create a logger emitting at `level` and above into `output`.
    pub fn new(level: Level, output: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            output: Mutex::new(output),
        }
    }

    /// A logger writing to stderr at the given level.
    pub fn stderr(level: Level) -> Self {
        Self::new(level, Box::new(std::io::stderr()))
    }
}

impl Logger for WriteLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        if level < self.level {
            return;
        }
        if let Ok(mut out) = self.output.lock() {
            let _ = writeln!(out, "{} {}", level.label(), message);
        }
    }
}

impl LogControl for WriteLogger {
    fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    fn set_output(&mut self, output: Box<dyn Write + Send>) {
        self.output = Mutex::new(output);
    }
}

impl fmt::Debug for WriteLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteLogger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// Logger forwarding into the `tracing` ecosystem.
///
/// `tracing` has no Notice or Fatal level; Notice maps to info and Fatal
/// to error. Process termination stays with the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBridge;

impl Logger for TracingBridge {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        match level {
            Level::Trace => tracing::trace!("{}", message),
            Level::Debug => tracing::debug!("{}", message),
            Level::Info | Level::Notice => tracing::info!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
            Level::Error | Level::Fatal => tracing::error!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test writer capturing everything written through it.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Notice);
        assert!(Level::Notice < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn level_labels() {
        assert_eq!(Level::Trace.to_string(), "[Trace]");
        assert_eq!(Level::Fatal.to_string(), "[Fatal]");
    }

    #[test]
    fn write_logger_formats_and_filters() {
        let capture = Capture::default();
        let logger = WriteLogger::new(Level::Info, Box::new(capture.clone()));

        logger.debug(format_args!("hidden"));
        logger.info(format_args!("shown {}", 1));
        logger.error(format_args!("also shown"));

        let out = capture.contents();
        assert!(!out.contains("hidden"));
        assert!(out.contains("[Info] shown 1"));
        assert!(out.contains("[Error] also shown"));
    }

    #[test]
    fn set_level_reconfigures_filtering() {
        let capture = Capture::default();
        let mut logger = WriteLogger::new(Level::Error, Box::new(capture.clone()));

        logger.notice(format_args!("suppressed"));
        logger.set_level(Level::Trace);
        logger.notice(format_args!("emitted"));

        let out = capture.contents();
        assert!(!out.contains("suppressed"));
        assert!(out.contains("[Notice] emitted"));
    }

    #[test]
    fn set_output_redirects() {
        let first = Capture::default();
        let second = Capture::default();
        let mut logger = WriteLogger::new(Level::Trace, Box::new(first.clone()));

        logger.info(format_args!("one"));
        logger.set_output(Box::new(second.clone()));
        logger.info(format_args!("two"));

        assert!(first.contents().contains("one"));
        assert!(!first.contents().contains("two"));
        assert!(second.contents().contains("two"));
    }

    #[test]
    fn tracing_bridge_is_callable_at_every_level() {
        // No subscriber installed; events are discarded but must not panic.
        let bridge = TracingBridge;
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Notice,
            Level::Warn,
            Level::Error,
            Level::Fatal,
        ] {
            bridge.log(level, format_args!("probe"));
        }
    }
}
