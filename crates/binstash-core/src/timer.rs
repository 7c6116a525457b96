//! Wall-clock measurement helpers
//!
//! `Stopwatch` is the building block the codec uses to time each pipeline
//! stage. `TimedScope` logs its label and elapsed time when dropped, for
//! callers that just want a one-line "how long did this take" record.

use std::time::{Duration, Instant};

use tracing::info;

use crate::humanize::humanize_duration;

/// A started wall-clock timer.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time as a human-readable string, e.g. `"1.52 secs"`.
    pub fn readable(&self) -> String {
        humanize_duration(self.elapsed())
    }
}

/// Logs `"<label>: <elapsed>"` at info level when dropped.
///
/// ```
/// use binstash_core::timer::TimedScope;
///
/// {
///     let _scope = TimedScope::new("rebuild index");
///     // work happens here
/// } // logs: rebuild index: 12.48 msecs
/// ```
pub struct TimedScope {
    label: String,
    stopwatch: Stopwatch,
}

impl TimedScope {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            stopwatch: Stopwatch::start(),
        }
    }

    /// Elapsed time so far, without ending the scope.
    pub fn partial(&self) -> Duration {
        self.stopwatch.elapsed()
    }
}

impl Drop for TimedScope {
    fn drop(&mut self) {
        info!("{}: {}", self.label, self.stopwatch.readable());
    }
}
