//! Theme system for the submit button demo
//! Supports both dark and light modes with a single brand accent

use iced::widget::container;
use iced::{Background, Color, Theme, color};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// ============================================================================
// Color Palette
// ============================================================================

/// Brand accent green (#19CC95)
///
/// The same green serves the idle button, the spinner arc and the success
/// text, so one constant covers all three.
pub const BRAND: Color = color!(0x19cc95);

/// Neutral backdrop the outer ring fades to while the spinner runs
pub const RING_BACKGROUND: Color = color!(0xe8e8e8);

/// Inner fill of the button at rest
pub const FILL: Color = Color::WHITE;

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
}

/// Get window background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Label font for the submit button
pub const LABEL_FONT: iced::Font = iced::Font {
    weight: iced::font::Weight::Semibold,
    ..iced::Font::DEFAULT
};
