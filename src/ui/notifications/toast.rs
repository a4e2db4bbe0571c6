// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the snackbar.
//!
//! The widget is the presentation side of the [`Manager`]: it renders the
//! live configuration, reports the rendered height back through
//! [`Message::Measured`] when first laid out and whenever it changes, and draws the card displaced by the manager's
//! current offset. At offset `0` the card sits just below the bottom edge.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId};
use super::options::CloseButton;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing};
use iced::widget::image::Image;
use iced::widget::{button, container, float, sensor, Container, Row, Space, Text};
use iced::{alignment, font, Color, Element, Font, Length, Size, Theme, Vector};
use std::time::Instant;

/// Label of the built-in close affordance.
const CLOSE_LABEL: &str = "Close";

/// Snackbar widget.
pub struct Toast;

impl Toast {
    /// Renders the snackbar overlay for the manager's live notification.
    ///
    /// Returns an empty element when the slot is idle.
    pub fn view(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let Some(notification) = manager.notification() else {
            return Space::new()
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        };

        let id = notification.id();
        let offset = manager.offset(now);

        // Park the card's top edge at the bottom of the viewport, then apply the offset.
        let floating = float(Self::card(notification)).translate(move |bounds, viewport| {
            Vector::new(0.0, viewport.y + viewport.height + offset - bounds.y)
        });

        let measured = sensor(floating)
            .key(id)
            .on_show(move |size| report_height(id, size))
            .on_resize(move |size| report_height(id, size));

        Container::new(measured)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }

    /// Renders the card: `[icon] [message] [close]`.
    fn card(notification: &Notification) -> Element<'_, Message> {
        let accent = parse_hex(notification.color()).unwrap_or(palette::GRAY_700);
        let text_style = notification.text_style();
        let text_color = parse_hex(&text_style.color).unwrap_or(palette::WHITE);

        let message_widget = Text::new(notification.message())
            .size(text_style.size)
            .color(text_color);

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(icon) = notification.icon() {
            let image = Image::new(icon.handle().clone())
                .width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD));
            content = content.push(Container::new(image).center_x(Length::FillPortion(1)));
        }

        content = content.push(Container::new(message_widget).width(Length::FillPortion(6)));

        if notification.show_close_button() {
            let close: Element<'_, Message> = match notification.close_button() {
                CloseButton::Default => button(Text::new(CLOSE_LABEL).color(palette::WHITE).font(
                    Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    },
                ))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(close_button_style)
                .into(),
                CloseButton::Custom(renderer) => renderer.render(Message::Close),
            };
            content = content.push(Container::new(close).center_x(Length::FillPortion(1)));
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::SNACKBAR_MAX_WIDTH)
            .padding(spacing::MD)
            .style(move |_theme: &Theme| card_style(accent))
            .into()
    }
}

/// Layout report for the card of notification `id`.
fn report_height(id: NotificationId, size: Size) -> Message {
    Message::Measured {
        id,
        height: size.height,
    }
}

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into a color.
#[must_use]
pub fn parse_hex(code: &str) -> Option<Color> {
    let hex = code.strip_prefix('#')?;
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;

    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| d * 17).collect(),
        6 | 8 => digits.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
        _ => return None,
    };

    let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
    Some(Color::from_rgba8(
        channels[0],
        channels[1],
        channels[2],
        f32::from(alpha) / 255.0,
    ))
}

/// Style function for the snackbar card.
fn card_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent)),
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the built-in close button.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let pressed_overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => pressed_overlay(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => pressed_overlay(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
