// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::{MAX_TIMER_WAKE_MS, TICK_INTERVAL_MS};
use crate::ui::notifications::TickDemand;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Creates the tick subscription driving snackbar animations and timers.
///
/// Transitions tick every frame. A lone auto-dismiss countdown wakes the
/// app once at its deadline, and an idle snackbar does not wake it at all.
pub fn create_tick_subscription(demand: TickDemand, now: Instant) -> Subscription<Message> {
    match demand {
        TickDemand::Idle => Subscription::none(),
        TickDemand::Frames => time::every(frame_interval()).map(Message::Tick),
        TickDemand::At(deadline) => {
            time::every(timer_wake_interval(deadline, now)).map(Message::Tick)
        }
    }
}

fn frame_interval() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS)
}

/// Time until `deadline`, kept within one frame and `MAX_TIMER_WAKE_MS`.
fn timer_wake_interval(deadline: Instant, now: Instant) -> Duration {
    deadline
        .saturating_duration_since(now)
        .clamp(frame_interval(), Duration::from_millis(MAX_TIMER_WAKE_MS))
}
