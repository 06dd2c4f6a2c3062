//! Debug log ring buffer.
//!
//! The face records what it did (settings applied, connectivity changes,
//! haptic requests, store failures) into a small ring buffer. Hosts can show
//! the lines on a debug page or forward them to their own logger.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Face started");
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::{self, Write};

use heapless::{Deque, String};

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 32;

/// One log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

/// Ring buffer for debug log messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped when
/// the buffer is full; long messages are truncated.
#[derive(Clone, Debug, Default)]
pub struct DebugLog {
    buffer: Deque<LogLine, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a log message. If buffer is full, oldest message is dropped.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Push a formatted message, truncated to the line length.
    ///
    /// ```ignore
    /// log.push_fmt(format_args!("tick {:02}:{:02}", hour, minute));
    /// ```
    pub fn push_fmt(
        &mut self,
        args: fmt::Arguments<'_>,
    ) {
        let mut line = Truncating(LogLine::new());
        let _ = line.write_fmt(args);
        self.push_line(line.0);
    }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(LogLine::as_str) }

    /// Most recent message.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(LogLine::as_str) }

    /// Get number of log entries.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

/// Writer that keeps what fits and silently drops the rest.
struct Truncating(LogLine);

impl Write for Truncating {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
