// SPDX-License-Identifier: MPL-2.0
//! Snackbar notification system for transient user feedback.
//!
//! A single slot shows at most one notification at a time. Callers request
//! a message with a severity; the manager resolves its display options,
//! waits for the presentation layer to measure it, slides it in, optionally
//! arms an auto-dismiss countdown, and slides it out on dismissal.
//!
//! # Components
//!
//! - [`notification`] - `Severity` and the resolved `Notification`
//! - [`options`] - `DisplayOptions` tiers and the configuration resolver
//! - [`manager`] - `Manager`, the visibility state machine
//! - [`animation`] - offset `Sequencer` for entrance and exit transitions
//! - [`timer`] - single-slot auto-dismiss countdown
//! - [`toast`] - Toast widget rendering the live notification
//!
//! # Usage
//!
//! ```ignore
//! use iced_snackbar::ui::notifications::{Manager, Severity, Toast};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! manager.show("Image saved", Severity::Success, Instant::now());
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view(&manager, now).map(Message::Snackbar);
//! ```
//!
//! # Design Considerations
//!
//! - Requests while a notification is showing or leaving are dropped
//! - The configuration stays rendered until the exit animation completes
//! - Every callback re-checks the phase; layout reports may arrive late

pub mod animation;
pub mod manager;
pub mod notification;
pub mod options;
pub mod timer;
mod toast;

pub use animation::{Direction, Ease, Sequencer, Transition};
pub use manager::{Effect, Manager, Message as SnackbarMessage, Phase, TickDemand};
pub use notification::{Notification, NotificationId, Severity};
pub use options::{
    resolve, CloseButton, CloseButtonRenderer, DisplayOptions, Icon, Layers, ResolvedTextStyle,
    TextStyle,
};
pub use timer::AutoDismissTimer;
pub use toast::{parse_hex, Toast};
