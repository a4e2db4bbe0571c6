// SPDX-License-Identifier: MPL-2.0
//! Snackbar lifecycle management.
//!
//! The `Manager` owns the single notification slot and sequences it through
//! `Idle -> Showing -> Dismissing -> Idle`. It never reads the clock itself:
//! every handler receives `now`, and every callback (layout report, tick,
//! close press) re-checks the current phase before acting, since those
//! signals may arrive in any order.
//!
//! A show request while a notification occupies the slot is dropped, not
//! queued.

use super::animation::{entrance_target, Direction, Ease, Sequencer, Transition};
use super::notification::{Notification, NotificationId, Severity};
use super::options::Layers;
use super::timer::AutoDismissTimer;
use std::time::Instant;

/// Lifecycle phase of the notification slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing shown, no configuration held.
    #[default]
    Idle,
    /// Configuration held; entrance pending, running or complete.
    Showing,
    /// Exit animation running; configuration still rendered underneath.
    Dismissing,
}

/// Messages for snackbar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request a new notification.
    Show {
        message: String,
        severity: Severity,
    },
    /// Hide whatever is showing (caller-initiated).
    Hide,
    /// The close affordance was pressed.
    Close,
    /// The presentation layer measured the rendered snackbar.
    Measured { id: NotificationId, height: f32 },
    /// Drives animations and the auto-dismiss timer.
    Tick,
}

/// Effects produced by snackbar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The exit finished and the slot is free again.
    Hidden,
}

/// How the host should deliver [`Message::Tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickDemand {
    /// Nothing pending.
    Idle,
    /// A transition is running; tick every frame.
    Frames,
    /// Only the auto-dismiss timer is pending; one tick at the deadline suffices.
    At(Instant),
}

/// Manages the single snackbar slot.
#[derive(Debug, Default)]
pub struct Manager {
    layers: Layers,
    phase: Phase,
    notification: Option<Notification>,
    /// Measured height of the rendered snackbar, `0.0` until reported.
    measured_height: f32,
    sequencer: Sequencer,
    timer: AutoDismissTimer,
}

impl Manager {
    /// Creates an idle manager using only the built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle manager with caller-supplied option tiers.
    #[must_use]
    pub fn with_layers(layers: Layers, ease: Ease) -> Self {
        Self {
            layers,
            sequencer: Sequencer::new(ease),
            ..Self::default()
        }
    }

    /// Replaces the option tiers used by subsequent show requests.
    pub fn set_layers(&mut self, layers: Layers) {
        self.layers = layers;
    }

    #[must_use]
    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    /// Shows a notification given its severity name.
    ///
    /// An unknown severity is logged and the call is ignored.
    pub fn show_notification(
        &mut self,
        message: impl Into<String>,
        severity: &str,
        now: Instant,
    ) -> Effect {
        match severity.parse::<Severity>() {
            Ok(severity) => self.show(message, severity, now),
            Err(err) => {
                tracing::error!(%err, "snackbar request ignored");
                Effect::None
            }
        }
    }

    /// Shows a notification unless one already occupies the slot.
    ///
    /// The entrance does not start here: it waits for the presentation
    /// layer to report a non-zero height.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> Effect {
        if self.phase != Phase::Idle {
            tracing::trace!(phase = ?self.phase, %severity, "snackbar busy, request dropped");
            return Effect::None;
        }

        let notification = self.layers.resolve(severity, message);
        if notification.auto_hide() {
            self.timer.arm(now, notification.duration_ms());
        }
        tracing::debug!(id = ?notification.id(), %severity, "snackbar showing");
        self.notification = Some(notification);
        self.phase = Phase::Showing;
        Effect::None
    }

    /// Hides the current notification. No-op when idle or already dismissing.
    pub fn hide_notification(&mut self, now: Instant) -> Effect {
        self.dismiss(now)
    }

    /// Close affordance pressed; shares the dismiss path with hiding.
    pub fn close(&mut self, now: Instant) -> Effect {
        self.dismiss(now)
    }

    /// Records the measured height and starts the entrance if still wanted.
    pub fn measured(&mut self, id: NotificationId, height: f32, now: Instant) -> Effect {
        let Some(notification) = self.notification.as_ref() else {
            tracing::trace!(?id, "layout report with no notification, ignored");
            return Effect::None;
        };
        if self.phase != Phase::Showing || notification.id() != id {
            tracing::trace!(?id, phase = ?self.phase, "stale layout report, ignored");
            return Effect::None;
        }
        if height <= 0.0 || height == self.measured_height {
            return Effect::None;
        }

        let duration_ms = notification.animation_duration_ms();
        self.measured_height = height;
        self.sequencer
            .start(Direction::Entrance, entrance_target(height), duration_ms, now);
        Effect::None
    }

    /// Advances the auto-dismiss timer and any running transition.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.timer.poll(now) {
            tracing::debug!("auto-dismiss timer fired");
            if self.dismiss(now) == Effect::Hidden {
                return Effect::Hidden;
            }
        }

        match self.sequencer.poll(now) {
            Some(finished) => self.on_transition_finished(&finished),
            None => Effect::None,
        }
    }

    /// Handles a snackbar message.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Show { message, severity } => self.show(message, severity, now),
            Message::Hide => self.hide_notification(now),
            Message::Close => self.close(now),
            Message::Measured { id, height } => self.measured(id, height, now),
            Message::Tick => self.tick(now),
        }
    }

    /// Drops all state without notifying, cancelling any pending timer.
    ///
    /// Call when the host tears the snackbar down.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.sequencer.reset();
        self.notification = None;
        self.measured_height = 0.0;
        self.phase = Phase::Idle;
    }

    fn dismiss(&mut self, now: Instant) -> Effect {
        if self.phase != Phase::Showing {
            return Effect::None;
        }

        self.timer.cancel();
        self.phase = Phase::Dismissing;

        if self.measured_height <= 0.0 {
            tracing::debug!("snackbar dismissed before layout, skipping exit animation");
            return self.finish_exit();
        }

        let duration_ms = self
            .notification
            .as_ref()
            .map_or(0, Notification::animation_duration_ms);
        self.sequencer.start(Direction::Exit, 0.0, duration_ms, now);
        Effect::None
    }

    fn on_transition_finished(&mut self, finished: &Transition) -> Effect {
        match finished.direction() {
            Direction::Entrance => {
                tracing::trace!(id = finished.id(), "entrance finished");
                Effect::None
            }
            Direction::Exit if self.phase == Phase::Dismissing => self.finish_exit(),
            Direction::Exit => Effect::None,
        }
    }

    fn finish_exit(&mut self) -> Effect {
        self.teardown();
        tracing::debug!("snackbar hidden");
        Effect::Hidden
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a notification is requested visible (as opposed to idle or leaving).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Showing
    }

    /// The live configuration; kept through the exit animation.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    #[must_use]
    pub fn measured_height(&self) -> f32 {
        self.measured_height
    }

    /// Current vertical offset from the resting position.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        self.sequencer.offset(now)
    }

    /// The transition currently running, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.sequencer.current()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    #[must_use]
    pub fn auto_dismiss_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// What the host must tick for the manager to make progress.
    ///
    /// A timer armed with an unrepresentable deadline never fires and
    /// demands nothing.
    #[must_use]
    pub fn tick_demand(&self) -> TickDemand {
        if self.sequencer.is_running() {
            return TickDemand::Frames;
        }
        self.timer
            .deadline()
            .map_or(TickDemand::Idle, TickDemand::At)
    }

    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.tick_demand() != TickDemand::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::options::DisplayOptions;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn current_id(manager: &Manager) -> NotificationId {
        manager.notification().expect("notification should be live").id()
    }

    #[test]
    fn new_manager_is_idle() {
        let manager = Manager::new();
        assert_eq!(manager.phase(), Phase::Idle);
        assert!(manager.notification().is_none());
        assert!(!manager.needs_ticks());
    }

    #[test]
    fn show_enters_showing_without_animating() {
        let mut manager = Manager::new();
        manager.show("hi", Severity::Error, Instant::now());

        assert_eq!(manager.phase(), Phase::Showing);
        assert_eq!(manager.notification().unwrap().message(), "hi");
        assert!(!manager.is_animating());
        assert!(manager.auto_dismiss_deadline().is_none());
    }

    #[test]
    fn second_show_is_dropped() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("first", Severity::Error, now);
        let id = current_id(&manager);

        manager.show("second", Severity::Success, now);

        let live = manager.notification().unwrap();
        assert_eq!(live.id(), id);
        assert_eq!(live.message(), "first");
        assert_eq!(live.severity(), Severity::Error);
        assert!(manager.auto_dismiss_deadline().is_none());
    }

    #[test]
    fn show_is_dropped_while_dismissing() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("first", Severity::Error, now);
        manager.measured(current_id(&manager), 40.0, now);
        manager.hide_notification(now);

        manager.show("second", Severity::Info, now);
        assert_eq!(manager.phase(), Phase::Dismissing);
        assert_eq!(manager.notification().unwrap().message(), "first");
    }

    #[test]
    fn invalid_severity_name_is_ignored() {
        let mut manager = Manager::new();
        let effect = manager.show_notification("oops", "warning", Instant::now());

        assert_eq!(effect, Effect::None);
        assert_eq!(manager.phase(), Phase::Idle);
    }

    #[test]
    fn severity_name_is_parsed() {
        let mut manager = Manager::new();
        manager.show_notification("ok", "success", Instant::now());
        assert_eq!(manager.notification().unwrap().severity(), Severity::Success);
    }

    #[test]
    fn measured_height_starts_entrance() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Info, now);
        manager.measured(current_id(&manager), 40.0, now);

        let transition = manager.transition().expect("entrance should run");
        assert_eq!(transition.direction(), Direction::Entrance);
        assert_eq!(transition.to(), -90.0);
        assert_eq!(transition.duration_ms(), 300);
    }

    #[test]
    fn zero_height_does_not_start_entrance() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Info, now);
        manager.measured(current_id(&manager), 0.0, now);

        assert!(!manager.is_animating());
        assert_eq!(manager.measured_height(), 0.0);
    }

    #[test]
    fn same_height_reported_again_is_ignored() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Info, start);
        let id = current_id(&manager);
        manager.measured(id, 40.0, start);
        let first = manager.transition().expect("entrance should run").id();

        manager.measured(id, 40.0, start + ms(100));

        let transition = manager.transition().expect("entrance should still run");
        assert_eq!(transition.id(), first);
        assert_eq!(transition.started_at(), start);
    }

    #[test]
    fn new_height_restarts_entrance_from_current_offset() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Info, start);
        let id = current_id(&manager);
        manager.measured(id, 40.0, start);
        manager.tick(start + ms(150));
        let mid_flight = manager.offset(start + ms(150));
        assert!(mid_flight < 0.0 && mid_flight > -90.0);

        manager.measured(id, 60.0, start + ms(150));

        let transition = manager.transition().expect("entrance should restart");
        assert_eq!(transition.direction(), Direction::Entrance);
        assert_eq!(transition.from(), mid_flight);
        assert_eq!(transition.to(), -110.0);
        assert_eq!(transition.started_at(), start + ms(150));
        assert_eq!(manager.measured_height(), 60.0);
    }

    #[test]
    fn new_height_after_settling_moves_to_new_target() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Error, start);
        let id = current_id(&manager);
        manager.measured(id, 40.0, start);
        manager.tick(start + ms(300));
        assert_eq!(manager.offset(start + ms(300)), -90.0);

        manager.measured(id, 64.0, start + ms(1000));
        manager.tick(start + ms(1300));

        assert!(!manager.is_animating());
        assert_eq!(manager.offset(start + ms(1300)), -114.0);
    }

    #[test]
    fn huge_auto_hide_duration_does_not_tick_every_frame() {
        let start = Instant::now();
        let layers = Layers::new().with_global(DisplayOptions::new().duration_ms(i64::MAX));
        let mut manager = Manager::with_layers(layers, Ease::default());
        manager.show("hi", Severity::Success, start);
        manager.measured(current_id(&manager), 40.0, start);
        assert_eq!(manager.tick_demand(), TickDemand::Frames);

        manager.tick(start + ms(300));

        let year = Duration::from_secs(60 * 60 * 24 * 365);
        match manager.tick_demand() {
            TickDemand::Idle => {}
            TickDemand::At(deadline) => assert!(deadline > start + year),
            TickDemand::Frames => panic!("settled snackbar should not tick every frame"),
        }
        assert_eq!(manager.phase(), Phase::Showing);
    }

    #[test]
    fn settled_auto_hide_waits_for_its_deadline() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.show("saved", Severity::Success, start);
        assert_eq!(manager.tick_demand(), TickDemand::At(start + ms(3000)));

        manager.measured(current_id(&manager), 40.0, start);
        assert_eq!(manager.tick_demand(), TickDemand::Frames);

        manager.tick(start + ms(300));
        assert_eq!(manager.tick_demand(), TickDemand::At(start + ms(3000)));

        manager.tick(start + ms(3000));
        assert_eq!(manager.phase(), Phase::Dismissing);
        assert_eq!(manager.tick_demand(), TickDemand::Frames);
    }

    #[test]
    fn layout_for_other_notification_is_ignored() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Info, now);
        manager.measured(NotificationId::new(), 40.0, now);

        assert!(!manager.is_animating());
    }

    #[test]
    fn close_dismisses_like_hide() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Error, now);
        manager.measured(current_id(&manager), 40.0, now);
        manager.tick(now + ms(300));

        manager.handle_message(Message::Close, now + ms(400));
        assert_eq!(manager.phase(), Phase::Dismissing);
        assert_eq!(manager.tick(now + ms(700)), Effect::Hidden);
        assert_eq!(manager.phase(), Phase::Idle);
    }

    #[test]
    fn hide_when_idle_is_noop() {
        let mut manager = Manager::new();
        assert_eq!(manager.hide_notification(Instant::now()), Effect::None);
        assert_eq!(manager.phase(), Phase::Idle);
    }

    #[test]
    fn hide_twice_hides_once() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Error, now);
        manager.measured(current_id(&manager), 40.0, now);

        manager.hide_notification(now + ms(100));
        let first_exit = manager.transition().unwrap().id();
        manager.hide_notification(now + ms(150));
        assert_eq!(manager.transition().unwrap().id(), first_exit);
    }

    #[test]
    fn exit_keeps_configuration_until_complete() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("hi", Severity::Error, now);
        manager.measured(current_id(&manager), 40.0, now);
        manager.tick(now + ms(300));
        manager.hide_notification(now + ms(500));

        assert_eq!(manager.tick(now + ms(600)), Effect::None);
        assert!(manager.notification().is_some());
        assert!(!manager.is_visible());

        assert_eq!(manager.tick(now + ms(800)), Effect::Hidden);
        assert!(manager.notification().is_none());
        assert_eq!(manager.measured_height(), 0.0);
    }

    #[test]
    fn exit_interrupting_entrance_starts_from_current_offset() {
        let now = Instant::now();
        let mut manager = Manager::with_layers(Layers::new(), Ease::Linear);
        manager.show("hi", Severity::Error, now);
        manager.measured(current_id(&manager), 50.0, now);

        manager.hide_notification(now + ms(150));
        let exit = manager.transition().unwrap();
        assert_eq!(exit.direction(), Direction::Exit);
        assert_eq!(exit.from(), -50.0);
        assert_eq!(exit.to(), 0.0);
    }

    #[test]
    fn auto_hide_dismisses_after_duration() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("ok", Severity::Success, now);
        manager.measured(current_id(&manager), 40.0, now);

        assert_eq!(manager.tick(now + ms(2999)), Effect::None);
        assert_eq!(manager.phase(), Phase::Showing);

        assert_eq!(manager.tick(now + ms(3000)), Effect::None);
        assert_eq!(manager.phase(), Phase::Dismissing);

        assert_eq!(manager.tick(now + ms(3300)), Effect::Hidden);
        assert_eq!(manager.phase(), Phase::Idle);
    }

    #[test]
    fn auto_hide_before_layout_hides_immediately() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("ok", Severity::Info, now);

        assert_eq!(manager.tick(now + ms(3000)), Effect::Hidden);
        assert_eq!(manager.phase(), Phase::Idle);
    }

    #[test]
    fn per_severity_options_disable_auto_hide() {
        let now = Instant::now();
        let layers =
            Layers::new().with_severity(Severity::Success, DisplayOptions::new().auto_hide(false));
        let mut manager = Manager::with_layers(layers, Ease::default());
        manager.show("ok", Severity::Success, now);

        assert!(manager.auto_dismiss_deadline().is_none());
        assert_eq!(manager.tick(now + ms(10_000)), Effect::None);
        assert_eq!(manager.phase(), Phase::Showing);
    }

    #[test]
    fn teardown_cancels_timer_without_hidden() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("ok", Severity::Success, now);
        manager.teardown();

        assert_eq!(manager.phase(), Phase::Idle);
        assert!(!manager.needs_ticks());
        assert_eq!(manager.tick(now + ms(3000)), Effect::None);
    }

    #[test]
    fn slot_is_reusable_after_hidden() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.show("first", Severity::Error, now);
        assert_eq!(manager.hide_notification(now), Effect::Hidden);

        manager.show("second", Severity::Info, now + ms(10));
        assert_eq!(manager.notification().unwrap().message(), "second");
        assert_eq!(manager.measured_height(), 0.0);
    }
}
