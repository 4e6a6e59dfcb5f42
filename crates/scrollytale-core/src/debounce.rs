//! Trailing-edge debouncer.
//!
//! Collapses a burst of pushes into the single most recent value, delivered
//! once the window has elapsed since the last push. Tick-polled rather than
//! timer-backed so there is no background handle to leak: dropping or
//! cancelling the debouncer is all the teardown it needs.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedule `value`, replacing any pending value and restarting the
    /// window. Only the last pushed value within a burst is ever delivered.
    pub fn push(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.window, value));
    }

    /// Deliver the pending value if its window has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if Instant::now() >= *deadline => {
                self.pending.take().map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Discard any pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
