// SPDX-License-Identifier: MPL-2.0
//! Display options and the configuration resolver.
//!
//! A snackbar's configuration is layered from four tiers, later tiers
//! overriding earlier ones field by field:
//!
//! 1. The built-in defaults row for the severity
//! 2. Global options (all severities)
//! 3. Per-severity options
//! 4. The message itself, which always wins
//!
//! Merging is shallow: an unset field never overrides. Values are not
//! validated; negative durations pass through to the timer and animation.

use super::manager::Message;
use super::notification::{Notification, NotificationId, Severity};
use crate::config::{BASE_TEXT_COLOR, BASE_TEXT_SIZE};
use iced::widget::image;
use iced::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Partial message text style, merged onto the base style when resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Text color as a hex code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl TextStyle {
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Merges this override onto the base text style.
    #[must_use]
    pub fn resolve(&self) -> ResolvedTextStyle {
        ResolvedTextStyle {
            size: self.size.unwrap_or(BASE_TEXT_SIZE),
            color: self
                .color
                .clone()
                .unwrap_or_else(|| BASE_TEXT_COLOR.to_string()),
        }
    }
}

/// Text style with every field populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTextStyle {
    pub size: f32,
    pub color: String,
}

impl Default for ResolvedTextStyle {
    fn default() -> Self {
        TextStyle::default().resolve()
    }
}

/// Icon rendered before the message.
#[derive(Debug, Clone)]
pub struct Icon(image::Handle);

impl Icon {
    /// Loads the icon lazily from an image file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self(image::Handle::from_path(path))
    }

    #[must_use]
    pub fn from_handle(handle: image::Handle) -> Self {
        Self(handle)
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.0
    }
}

type RenderFn = dyn Fn(Message) -> Element<'static, Message> + Send + Sync;

/// Factory for a custom close affordance.
///
/// The factory receives the message that dismisses the snackbar and must
/// emit it when the user activates the affordance.
#[derive(Clone)]
pub struct CloseButtonRenderer(Arc<RenderFn>);

impl CloseButtonRenderer {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(Message) -> Element<'static, Message> + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// Builds the affordance, wiring `dismiss` as its activation message.
    #[must_use]
    pub fn render(&self, dismiss: Message) -> Element<'static, Message> {
        (self.0)(dismiss)
    }
}

impl fmt::Debug for CloseButtonRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CloseButtonRenderer").field(&"<fn>").finish()
    }
}

/// Which close affordance to render when the close button is shown.
#[derive(Debug, Clone, Default)]
pub enum CloseButton {
    /// The built-in "Close" text button.
    #[default]
    Default,
    /// A caller-supplied affordance.
    Custom(CloseButtonRenderer),
}

impl CloseButton {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, CloseButton::Custom(_))
    }
}

/// Optional display options shared by the global and per-severity tiers.
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    /// Accent color identifier, usually a hex code.
    pub color: Option<String>,
    /// Time visible before auto-dismiss, in milliseconds.
    pub duration_ms: Option<i64>,
    pub auto_hide: Option<bool>,
    pub show_close_button: Option<bool>,
    pub icon: Option<Icon>,
    pub text_style: Option<TextStyle>,
    /// Entrance and exit transition duration, in milliseconds.
    pub animation_duration_ms: Option<i64>,
    pub close_button: Option<CloseButtonRenderer>,
}

impl DisplayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = Some(auto_hide);
        self
    }

    #[must_use]
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = Some(show);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = Some(text_style);
        self
    }

    #[must_use]
    pub fn animation_duration_ms(mut self, duration_ms: i64) -> Self {
        self.animation_duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn close_button(mut self, renderer: CloseButtonRenderer) -> Self {
        self.close_button = Some(renderer);
        self
    }

    /// Layers `over` on top of `self`; set fields in `over` win.
    #[must_use]
    pub fn merged(&self, over: &DisplayOptions) -> DisplayOptions {
        DisplayOptions {
            color: over.color.clone().or_else(|| self.color.clone()),
            duration_ms: over.duration_ms.or(self.duration_ms),
            auto_hide: over.auto_hide.or(self.auto_hide),
            show_close_button: over.show_close_button.or(self.show_close_button),
            icon: over.icon.clone().or_else(|| self.icon.clone()),
            text_style: over.text_style.clone().or_else(|| self.text_style.clone()),
            animation_duration_ms: over.animation_duration_ms.or(self.animation_duration_ms),
            close_button: over
                .close_button
                .clone()
                .or_else(|| self.close_button.clone()),
        }
    }
}

/// Resolves the configuration of a single notification.
///
/// The defaults row for `severity` supplies every field `global` and
/// `per_severity` leave unset, so the result is always fully populated.
pub fn resolve(
    severity: Severity,
    global: &DisplayOptions,
    per_severity: &DisplayOptions,
    message: impl Into<String>,
) -> Notification {
    let defaults = severity.defaults();
    let layered = global.merged(per_severity);

    Notification {
        id: NotificationId::new(),
        severity,
        message: message.into(),
        color: layered
            .color
            .unwrap_or_else(|| defaults.color.to_string()),
        duration_ms: layered.duration_ms.unwrap_or(defaults.duration_ms),
        auto_hide: layered.auto_hide.unwrap_or(defaults.auto_hide),
        show_close_button: layered
            .show_close_button
            .unwrap_or(defaults.show_close_button),
        icon: layered.icon,
        text_style: layered.text_style.unwrap_or_default().resolve(),
        animation_duration_ms: layered
            .animation_duration_ms
            .unwrap_or(defaults.animation_duration_ms),
        close_button: layered
            .close_button
            .map_or(CloseButton::Default, CloseButton::Custom),
    }
}

/// The caller-supplied option tiers: global plus one per severity.
#[derive(Debug, Clone, Default)]
pub struct Layers {
    global: DisplayOptions,
    error: DisplayOptions,
    success: DisplayOptions,
    info: DisplayOptions,
}

impl Layers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options applied to every severity.
    #[must_use]
    pub fn with_global(mut self, options: DisplayOptions) -> Self {
        self.global = options;
        self
    }

    /// Replaces the options applied to one severity only.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity, options: DisplayOptions) -> Self {
        *self.for_severity_mut(severity) = options;
        self
    }

    #[must_use]
    pub fn global(&self) -> &DisplayOptions {
        &self.global
    }

    #[must_use]
    pub fn for_severity(&self, severity: Severity) -> &DisplayOptions {
        match severity {
            Severity::Error => &self.error,
            Severity::Success => &self.success,
            Severity::Info => &self.info,
        }
    }

    fn for_severity_mut(&mut self, severity: Severity) -> &mut DisplayOptions {
        match severity {
            Severity::Error => &mut self.error,
            Severity::Success => &mut self.success,
            Severity::Info => &mut self.info,
        }
    }

    /// Resolves a notification against these tiers.
    #[must_use]
    pub fn resolve(&self, severity: Severity, message: impl Into<String>) -> Notification {
        resolve(severity, &self.global, self.for_severity(severity), message)
    }
}
