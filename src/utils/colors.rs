/// ANSI color helper utilities for terminal output.
use crate::config::UiSection;
use crate::models::time_entry::{HOURS_TOLERANCE, exceeds_limit};
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Parse a `#RRGGBB` colour.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Terminal theme built from the `[ui]` section of the configuration.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Colour,
    pub secondary: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_ui(&UiSection::default())
    }
}

impl Theme {
    /// Invalid colours fall back to the built-in palette.
    pub fn from_ui(ui: &UiSection) -> Self {
        let rgb = |s: &str, fallback: (u8, u8, u8)| {
            let (r, g, b) = parse_hex_color(s).unwrap_or(fallback);
            Colour::RGB(r, g, b)
        };
        Self {
            primary: rgb(&ui.primary_color, (0x1f, 0x77, 0xb4)),
            secondary: rgb(&ui.secondary_color, (0xff, 0x7f, 0x0e)),
        }
    }

    pub fn heading(&self, text: &str) -> String {
        Style::new().bold().fg(self.primary).paint(text).to_string()
    }

    pub fn accent(&self, text: &str) -> String {
        self.secondary.paint(text).to_string()
    }
}

/// Hours colour against the daily limit: green under, yellow at, red over.
pub fn color_for_total(total: f64, max: f64) -> &'static str {
    if exceeds_limit(total, max) {
        RED
    } else if (total - max).abs() <= HOURS_TOLERANCE {
        YELLOW
    } else {
        GREEN
    }
}

/// Returns GREY text when the field is empty (None, "" or "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
