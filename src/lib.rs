// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides single-slot snackbar notifications for Iced applications.
//!
//! Callers request a short-lived message with a severity (error, success or
//! info); the snackbar resolves its display options, slides in once its
//! height is known, optionally dismisses itself after a delay, and slides
//! out again. The crate also ships a small demo application.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
