//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Focused-field foreground color.
    pub focus_fg: Color,
    /// Focused-field background color.
    pub focus_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Warning color, used for input-error prompts.
    pub warning: Color,
    /// Plotted line and marker color.
    pub accent: Color,
    /// Gridline color.
    pub grid: Color,
    /// Tooltip foreground color.
    pub tooltip_fg: Color,
    /// Tooltip background color.
    pub tooltip_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus_fg: Color::Rgb(40, 40, 40),
                focus_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                warning: Color::Rgb(250, 189, 47),
                accent: Color::Rgb(251, 73, 52),
                grid: Color::Rgb(102, 92, 84),
                tooltip_fg: Color::Rgb(40, 40, 40),
                tooltip_bg: Color::Rgb(235, 219, 178),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus_fg: Color::Rgb(251, 245, 234),
                focus_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                warning: Color::Rgb(181, 118, 20),
                accent: Color::Rgb(157, 0, 6),
                grid: Color::Rgb(213, 196, 161),
                tooltip_fg: Color::Rgb(251, 245, 234),
                tooltip_bg: Color::Rgb(60, 56, 54),
            },
        }
    }
}
