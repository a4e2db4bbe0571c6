// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss countdown.
//!
//! The timer holds at most one deadline. It is polled on every tick and
//! fires exactly once; cancelling clears the deadline so a late poll is a
//! no-op.

use std::time::{Duration, Instant};

/// Single-slot auto-dismiss countdown.
#[derive(Debug, Clone, Default)]
pub struct AutoDismissTimer {
    deadline: Option<Instant>,
    /// Armed with a duration too large to represent; never fires.
    unbounded: bool,
}

impl AutoDismissTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the countdown, replacing any previous deadline.
    ///
    /// Non-positive durations expire on the next poll.
    pub fn arm(&mut self, now: Instant, duration_ms: i64) {
        if self.is_armed() {
            tracing::warn!("auto-dismiss timer re-armed while a deadline was pending");
        }
        let delay = u64::try_from(duration_ms).map_or(Duration::ZERO, Duration::from_millis);
        self.deadline = now.checked_add(delay);
        self.unbounded = self.deadline.is_none();
        tracing::trace!(?delay, "auto-dismiss timer armed");
    }

    /// Cancels the countdown. Returns `true` if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        self.deadline = None;
        self.unbounded = false;
        if was_armed {
            tracing::trace!("auto-dismiss timer cancelled");
        }
        was_armed
    }

    /// Returns `true` exactly once, on the first poll at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some() || self.unbounded
    }

    /// `None` when disarmed or when the deadline is unrepresentable.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
