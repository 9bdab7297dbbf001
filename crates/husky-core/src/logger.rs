// Rust guideline compliant 2026-02-12

//! Logging collaborators for husky operations.
//!
//! Operations report progress through a [`Logger`] rather than writing to the
//! terminal directly, so tests and embedders can substitute their own sink.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Prefix attached to every message emitted by the default logger.
pub const LOG_PREFIX: &str = "husky - ";

/// Text sink for operation progress messages.
///
/// Any conforming implementation is accepted; the manager never inspects
/// what the sink does with a message.
pub trait Logger {
    /// Reports an informational message.
    ///
    /// # Arguments
    /// * `message` - The message to report
    fn log(&self, message: &str);

    /// Reports a warning.
    ///
    /// # Arguments
    /// * `message` - The message to report
    fn warn(&self, message: &str);

    /// Reports an error.
    ///
    /// # Arguments
    /// * `message` - The message to report
    fn error(&self, message: &str);
}

/// Default logger writing tagged messages to the standard streams.
///
/// Informational messages go to stdout; warnings and errors go to stderr,
/// colored when the stream is a terminal.
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}{}", LOG_PREFIX, message);
    }

    fn warn(&self, message: &str) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(stderr, "{}{}", LOG_PREFIX, message);
        let _ = stderr.reset();
    }

    fn error(&self, message: &str) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = writeln!(stderr, "{}{}", LOG_PREFIX, message);
        let _ = stderr.reset();
    }
}
