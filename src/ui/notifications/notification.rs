// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Severity` enum that selects a row of the
//! built-in defaults table, and the `Notification` struct: the fully
//! resolved configuration of one visible snackbar.

use super::options::{CloseButton, Icon, ResolvedTextStyle};
use crate::config::{SeverityDefaults, ERROR_DEFAULTS, INFO_DEFAULTS, SUCCESS_DEFAULTS};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level selects the default color and dismiss behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Error requiring attention (red, manual dismiss).
    Error,
    /// Operation completed successfully (green, auto-dismiss).
    Success,
    /// Informational message (blue, auto-dismiss).
    Info,
}

impl Severity {
    /// All severities, in table order.
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Success, Severity::Info];

    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }

    /// Returns the built-in defaults row for this severity.
    #[must_use]
    pub fn defaults(self) -> &'static SeverityDefaults {
        match self {
            Severity::Error => &ERROR_DEFAULTS,
            Severity::Success => &SUCCESS_DEFAULTS,
            Severity::Info => &INFO_DEFAULTS,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = crate::error::Error;

    /// Parses one of the exact literals `error`, `success` or `info`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            other => Err(crate::error::Error::InvalidKind(other.to_string())),
        }
    }
}

/// A notification whose display options have all been resolved.
///
/// Produced fresh for every accepted show request and owned by the
/// [`Manager`](super::Manager) until its exit animation completes.
#[derive(Debug, Clone)]
pub struct Notification {
    pub(super) id: NotificationId,
    pub(super) severity: Severity,
    pub(super) message: String,
    pub(super) color: String,
    pub(super) duration_ms: i64,
    pub(super) auto_hide: bool,
    pub(super) show_close_button: bool,
    pub(super) icon: Option<Icon>,
    pub(super) text_style: ResolvedTextStyle,
    pub(super) animation_duration_ms: i64,
    pub(super) close_button: CloseButton,
}

impl Notification {
    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity it was requested with.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the accent color identifier (usually a hex code).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns how long the snackbar stays visible before auto-dismiss.
    ///
    /// Only meaningful when [`auto_hide`](Self::auto_hide) is `true`.
    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn show_close_button(&self) -> bool {
        self.show_close_button
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// Returns the message style after merging onto the base text style.
    #[must_use]
    pub fn text_style(&self) -> &ResolvedTextStyle {
        &self.text_style
    }

    /// Returns the duration shared by the entrance and exit transitions.
    #[must_use]
    pub fn animation_duration_ms(&self) -> i64 {
        self.animation_duration_ms
    }

    #[must_use]
    pub fn close_button(&self) -> &CloseButton {
        &self.close_button
    }
}
