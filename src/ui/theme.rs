//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::config::ThemeChoice;
use crate::render::SeriesColor;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for titles and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for metric values on the cards.
    pub value: Style,
    /// Style for secondary text such as "updated" timestamps.
    pub muted: Style,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for the newest table row.
    pub newest: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
    pub red: Color,
    pub blue: Color,
    pub green: Color,
    pub purple: Color,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            value: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            newest: Style::default().add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
            red: Color::Rgb(239, 68, 68),
            blue: Color::Rgb(59, 130, 246),
            green: Color::Rgb(34, 197, 94),
            purple: Color::Rgb(168, 85, 247),
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            value: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            newest: Style::default().add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
            red: Color::Rgb(220, 38, 38),
            blue: Color::Rgb(37, 99, 235),
            green: Color::Rgb(22, 163, 74),
            purple: Color::Rgb(147, 51, 234),
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a configured choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Terminal color for a series color identity.
    pub fn series_color(&self, color: SeriesColor) -> Color {
        match color {
            SeriesColor::Red => self.red,
            SeriesColor::Blue => self.blue,
            SeriesColor::Green => self.green,
            SeriesColor::Purple => self.purple,
        }
    }
}
