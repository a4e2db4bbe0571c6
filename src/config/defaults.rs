// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the built-in
//! per-severity display table and the timing constants of the snackbar.
//!
//! # Categories
//!
//! - **Severity table**: Fully populated defaults for `error`, `success`, `info`
//! - **Motion**: Entrance clearance and tick cadence
//! - **Text**: Base text style the per-call overrides merge onto

// ==========================================================================
// Severity Table
// ==========================================================================

/// A fully populated row of the built-in defaults table.
///
/// Every display option that has a meaningful default lives here, so the
/// resolver can always produce a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityDefaults {
    /// Accent color as a hex code.
    pub color: &'static str,
    /// Time visible before auto-dismiss fires, in milliseconds.
    pub duration_ms: i64,
    /// Whether the snackbar dismisses itself after `duration_ms`.
    pub auto_hide: bool,
    /// Whether the manual close affordance is rendered.
    pub show_close_button: bool,
    /// Duration of both entrance and exit transitions, in milliseconds.
    pub animation_duration_ms: i64,
}

/// Defaults for error snackbars (red, manual dismiss).
pub const ERROR_DEFAULTS: SeverityDefaults = SeverityDefaults {
    color: "#c20600",
    duration_ms: 3000,
    auto_hide: false,
    show_close_button: true,
    animation_duration_ms: 300,
};

/// Defaults for success snackbars (green, auto-dismiss).
pub const SUCCESS_DEFAULTS: SeverityDefaults = SeverityDefaults {
    color: "#008c0c",
    duration_ms: 3000,
    auto_hide: true,
    show_close_button: false,
    animation_duration_ms: 300,
};

/// Defaults for info snackbars (blue, auto-dismiss).
pub const INFO_DEFAULTS: SeverityDefaults = SeverityDefaults {
    color: "#003f8c",
    duration_ms: 3000,
    auto_hide: true,
    show_close_button: false,
    animation_duration_ms: 300,
};

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Extra distance past the measured height the entrance travels, so the
/// snackbar fully clears the screen edge.
pub const ENTRANCE_CLEARANCE: f32 = 50.0;

/// Tick cadence while a transition is running (in milliseconds).
/// Roughly one frame at 60 Hz.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Longest sleep between ticks while only the auto-dismiss timer is pending
/// (in milliseconds).
pub const MAX_TIMER_WAKE_MS: u64 = 60_000;

// ==========================================================================
// Text Defaults
// ==========================================================================

/// Base message text color.
pub const BASE_TEXT_COLOR: &str = "#fff";

/// Base message font size.
pub const BASE_TEXT_SIZE: f32 = 16.0;
