// SPDX-License-Identifier: MPL-2.0
//! Iced view functions for rendering a presented toast.
//!
//! These are ready-made building blocks for embeddings that render with
//! Iced: [`view`] draws one toast as a state-colored card, [`view_overlay`]
//! aligns it to the toast's [`Location`]. Taps emit [`Message::Tapped`],
//! which the embedding routes to [`Manager::tapped`](crate::Manager::tapped)
//! together with the active surface handle.
//!
//! Entry and exit animation is owned by the embedding; the toast's
//! [`Direction`](crate::Direction) hints say which way it should slide.

use crate::style::{Style, Width};
use crate::toast::{Location, Toast};
use iced::widget::{container, mouse_area, text, Container, Text};
use iced::{alignment, Element, Length, Theme};

const TEXT_SIZE: f32 = 14.0;
const CARD_PADDING: f32 = 12.0;
const OVERLAY_PADDING: f32 = 16.0;

/// Messages emitted by the toast card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user tapped the toast.
    Tapped,
}

/// Renders one toast as a tappable card.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let style = toast.state().style();
    let text_color = style.text_color;

    let message = Text::new(toast.message())
        .size(TEXT_SIZE)
        .style(move |_theme: &Theme| text::Style {
            color: Some(text_color),
        });

    let card = Container::new(message)
        .width(card_width(style.width))
        .padding(CARD_PADDING)
        .style(move |_theme: &Theme| card_style(&style));

    mouse_area(card).on_press(Message::Tapped).into()
}

/// Renders the toast inside a full-screen overlay, aligned to its location.
pub fn view_overlay(toast: &Toast) -> Element<'_, Message> {
    let align_y = match toast.location() {
        Location::Top => alignment::Vertical::Top,
        Location::Bottom => alignment::Vertical::Bottom,
    };

    Container::new(view(toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(align_y)
        .padding(OVERLAY_PADDING)
        .into()
}

/// Maps a [`Width`] policy onto an Iced length.
///
/// Percentage and text-fitting policies render as approximations; exact
/// sizing belongs to the embedding.
fn card_width(width: Width) -> Length {
    match width {
        Width::Fixed(value) => Length::Fixed(value),
        Width::ScreenPercentage(_) => Length::Fill,
        Width::FittingText { .. } => Length::Shrink,
    }
}

/// Style function for the toast card container.
fn card_style(style: &Style) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(style.background)),
        border: iced::Border {
            color: iced::Color::TRANSPARENT,
            width: 0.0,
            radius: style.corner_radius.into(),
        },
        text_color: Some(style.text_color),
        ..Default::default()
    }
}
