// SPDX-License-Identifier: MPL-2.0
//! Visual style descriptors attached to toast requests.
//!
//! Styles are opaque to the presentation queue: the manager threads them
//! through to the presentation surface untouched, and nothing in here ever
//! influences queuing or timing.

use iced::Color;

/// Preset accent colors for the built-in visual states.
pub mod palette {
    use iced::Color;

    pub const SUCCESS: Color = Color::from_rgb(0.18, 0.8, 0.443);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.769, 0.059);
    pub const ERROR: Color = Color::from_rgb(0.906, 0.298, 0.235);
    pub const INFO: Color = Color::from_rgb(0.204, 0.286, 0.369);

    /// Text color used by every preset.
    pub const TEXT: Color = Color::WHITE;
}

/// Width policy for the toast card.
///
/// Percentage and text-fitting policies are presentation hints only; the
/// widget layer renders them as approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Width {
    /// Fixed width in logical pixels.
    Fixed(f32),
    /// Ratio of the screen width, expected in `0.0..=1.0`.
    ScreenPercentage(f32),
    /// Shrink to the message text, up to the given maximum text width.
    FittingText { max_text_width: f32 },
}

impl Default for Width {
    fn default() -> Self {
        Width::Fixed(280.0)
    }
}

/// Concrete appearance of a toast card.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Background color of the card.
    pub background: Color,
    /// Color of the message text.
    pub text_color: Color,
    /// Width policy of the card.
    pub width: Width,
    /// Corner radius of the card.
    pub corner_radius: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: palette::INFO,
            text_color: palette::TEXT,
            width: Width::default(),
            corner_radius: 6.0,
        }
    }
}

/// Semantic state of a toast, resolving to a [`Style`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VisualState {
    /// A success message (green).
    Success,
    /// An error message (red).
    Error,
    /// A warning message (yellow).
    Warning,
    /// An informational message (slate).
    #[default]
    Info,
    /// A fully custom appearance.
    Custom(Style),
}

impl VisualState {
    /// Resolves this state to the style the surface should render.
    #[must_use]
    pub fn style(&self) -> Style {
        let background = match self {
            VisualState::Success => palette::SUCCESS,
            VisualState::Error => palette::ERROR,
            VisualState::Warning => palette::WARNING,
            VisualState::Info => palette::INFO,
            VisualState::Custom(style) => return style.clone(),
        };

        Style {
            background,
            ..Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_colors_are_distinct() {
        let success = VisualState::Success.style().background;
        let error = VisualState::Error.style().background;
        let warning = VisualState::Warning.style().background;
        let info = VisualState::Info.style().background;

        assert_ne!(success, error);
        assert_ne!(success, warning);
        assert_ne!(success, info);
        assert_ne!(error, warning);
        assert_ne!(error, info);
        assert_ne!(warning, info);
    }

    #[test]
    fn custom_state_passes_style_through() {
        let style = Style {
            background: Color::BLACK,
            text_color: Color::WHITE,
            width: Width::ScreenPercentage(0.8),
            corner_radius: 12.0,
        };

        assert_eq!(VisualState::Custom(style.clone()).style(), style);
    }

    #[test]
    fn default_width_is_fixed() {
        assert_eq!(Width::default(), Width::Fixed(280.0));
    }

    #[test]
    fn default_state_is_info() {
        assert_eq!(VisualState::default(), VisualState::Info);
        assert_eq!(VisualState::default().style().background, palette::INFO);
    }
}
