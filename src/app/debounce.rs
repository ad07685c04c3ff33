//! Timer-driven debouncing of a rapidly changing value.
//!
//! The plugin host offers one-shot timers (`set_timeout`) whose expirations
//! arrive as events without an identifier. Every [`Debouncer::push`] arms one
//! timer of the same delay; because equal timers expire in the order they were
//! armed, the value is committed when the last armed timer expires, i.e. one
//! full delay after the last push.

use std::time::Duration;

/// Holds the latest pushed value until input pauses for `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<T>,
    armed: usize,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            armed: 0,
        }
    }

    /// Records `value` as the pending value and returns the timer to arm.
    pub fn push(&mut self, value: T) -> Duration {
        self.pending = Some(value);
        self.armed += 1;
        self.delay
    }

    /// Consumes one timer expiration.
    ///
    /// Returns the pending value once the last armed timer has expired.
    /// Expirations with nothing armed are ignored.
    pub fn expire(&mut self) -> Option<T> {
        if self.armed == 0 {
            return None;
        }
        self.armed -= 1;
        if self.armed == 0 {
            self.pending.take()
        } else {
            None
        }
    }

    /// The value waiting to be committed, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Number of armed timers not yet expired.
    #[must_use]
    pub const fn armed(&self) -> usize {
        self.armed
    }
}
