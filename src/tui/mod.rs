mod app;
pub mod board;
pub mod column;
pub mod form;
pub mod input;
pub mod keys;
pub mod mode;

pub use app::{to_msg, App};

use crate::config::ThemeConfig;
use ratatui::style::Color;

/// Helper to convert hex color string to ratatui Color
pub(crate) fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}
