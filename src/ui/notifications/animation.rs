// SPDX-License-Identifier: MPL-2.0
//! Offset animation for the snackbar's entrance and exit.
//!
//! The sequencer drives a single scalar: the vertical displacement of the
//! snackbar from its resting position just below the bottom edge. The
//! entrance moves it up to `-(height + ENTRANCE_CLEARANCE)`, the exit moves
//! it back to `0`. Each started [`Transition`] is the command handed to the
//! presentation layer; its completion is reported once by [`Sequencer::poll`].

use crate::config::ENTRANCE_CLEARANCE;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    #[default]
    OutCubic,
    InOutCubic,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Which way a transition moves the snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Slide into view.
    Entrance,
    /// Slide back out of view.
    Exit,
}

/// Offset the entrance animates to for a snackbar of the given height.
#[must_use]
pub fn entrance_target(height: f32) -> f32 {
    -(height + ENTRANCE_CLEARANCE)
}

/// An "animate offset to `to` over `duration_ms`" command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    id: u64,
    direction: Direction,
    from: f32,
    to: f32,
    duration_ms: i64,
    started_at: Instant,
}

impl Transition {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Linear progress in `[0, 1]`. Non-positive durations are already complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration_ms <= 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let elapsed = now.saturating_duration_since(self.started_at).as_millis() as f32;
        #[allow(clippy::cast_precision_loss)]
        let total = self.duration_ms as f32;
        (elapsed / total).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated offset at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant, ease: Ease) -> f32 {
        let t = ease.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }
}

/// Drives the snackbar offset through entrance and exit transitions.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    ease: Ease,
    /// Offset at rest, once the last transition settled.
    settled: f32,
    active: Option<Transition>,
    next_id: u64,
}

impl Sequencer {
    #[must_use]
    pub fn new(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Current offset, interpolated if a transition is running.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.active
            .as_ref()
            .map_or(self.settled, |transition| transition.value_at(now, self.ease))
    }

    /// Starts a transition from the current offset, superseding any running one.
    ///
    /// A superseded transition never reports completion.
    pub fn start(
        &mut self,
        direction: Direction,
        to: f32,
        duration_ms: i64,
        now: Instant,
    ) -> Transition {
        let from = self.offset(now);
        self.next_id += 1;
        let transition = Transition {
            id: self.next_id,
            direction,
            from,
            to,
            duration_ms,
            started_at: now,
        };
        tracing::debug!(?direction, from, to, duration_ms, "transition started");
        self.active = Some(transition);
        transition
    }

    /// Takes the running transition if it has finished at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        let finished = self.active.filter(|t| t.is_finished(now))?;
        self.active = None;
        self.settled = finished.to;
        Some(finished)
    }

    /// The running transition, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Drops any running transition and returns to the resting offset.
    pub fn reset(&mut self) {
        self.active = None;
        self.settled = 0.0;
    }
}
