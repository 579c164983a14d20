use ratatui::style::Color;

use crate::model::Priority;

/// Color palette for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub error: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xD0, 0xDC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x66, 0x70, 0x80),
            accent: Color::Rgb(0x4E, 0xC9, 0xB0),
            error: Color::Rgb(0xF4, 0x47, 0x47),
            selection_bg: Color::Rgb(0x26, 0x30, 0x40),
            search_match_bg: Color::Rgb(0xE5, 0xC0, 0x7B),
            search_match_fg: Color::Rgb(0x10, 0x14, 0x1C),
            priority_low: Color::Rgb(0x6A, 0x99, 0x55),
            priority_medium: Color::Rgb(0xE5, 0xC0, 0x7B),
            priority_high: Color::Rgb(0xF4, 0x47, 0x47),
        }
    }
}

impl Theme {
    /// Badge color for a priority level.
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Low => self.priority_low,
            Priority::Medium => self.priority_medium,
            Priority::High => self.priority_high,
        }
    }
}
