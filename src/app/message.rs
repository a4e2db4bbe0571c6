// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Severity, SnackbarMessage};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Request a snackbar of the given severity.
    Show(Severity),
    /// Request a snackbar through the string API with an unknown name.
    ShowInvalid,
    /// Hide whatever snackbar is showing.
    Hide,
    /// Forwarded snackbar message (layout reports, close presses).
    Snackbar(SnackbarMessage),
    /// Periodic tick while an animation or auto-dismiss timer is pending.
    Tick(Instant),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Explicit `settings.toml` path (`--config`).
    pub config_path: Option<PathBuf>,
}
