// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a snackbar.
//!
//! The `App` struct wires the snackbar [`Manager`] into an Iced program:
//! buttons request notifications, the [`Toast`] overlay renders them, and a
//! tick subscription advances animations while any are pending.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{Effect, Manager, Severity, SnackbarMessage, Toast};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Subscription, Task};
use std::time::Instant;

/// Root application state.
pub struct App {
    snackbar: Manager,
    /// Time of the latest update, used to sample the snackbar offset in `view`.
    now: Instant,
    shown: u32,
    hidden: u32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            snackbar: Manager::new(),
            now: Instant::now(),
            shown: 0,
            hidden: 0,
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(&flags), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the snackbar tiers from the settings file.
    fn new(flags: &Flags) -> (Self, Task<Message>) {
        let (config, warning) = match &flags.config_path {
            Some(path) => config::load_or_default(path),
            None => config::load(),
        };

        let mut app = Self {
            snackbar: Manager::with_layers(config.to_layers(), config.ease()),
            ..Self::default()
        };

        if let Some(warning) = warning {
            app.snackbar.show(
                format!("Settings ignored: {warning}"),
                Severity::Error,
                app.now,
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Snackbar Demo")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(at) => *at,
            _ => Instant::now(),
        };
        self.now = now;

        let effect = match message {
            Message::Show(severity) => {
                self.shown += 1;
                let text = format!("{severity} notification #{}", self.shown);
                self.snackbar.show(text, severity, now)
            }
            Message::ShowInvalid => self
                .snackbar
                .show_notification("this is never shown", "warning", now),
            Message::Hide => self.snackbar.hide_notification(now),
            Message::Snackbar(msg) => self.snackbar.handle_message(msg, now),
            Message::Tick(_) => self.snackbar.handle_message(SnackbarMessage::Tick, now),
        };

        if effect == Effect::Hidden {
            self.hidden += 1;
            tracing::info!(hidden = self.hidden, "snackbar hidden");
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let demo_button = |label: &'static str, message: Message| {
            button(Text::new(label))
                .width(sizing::DEMO_BUTTON_WIDTH)
                .on_press(message)
        };

        let controls = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(demo_button("Show error", Message::Show(Severity::Error)))
            .push(demo_button("Show success", Message::Show(Severity::Success)))
            .push(demo_button("Show info", Message::Show(Severity::Info)))
            .push(demo_button("Show invalid", Message::ShowInvalid))
            .push(demo_button("Hide", Message::Hide))
            .push(Text::new(format!(
                "phase: {:?} | hidden: {}",
                self.snackbar.phase(),
                self.hidden
            )));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG);

        Stack::new()
            .push(content)
            .push(Toast::view(&self.snackbar, self.now).map(Message::Snackbar))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.snackbar.tick_demand(), self.now)
    }
}
