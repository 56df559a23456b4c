//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

static ANSI_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

/// Remove ANSI colour sequences, for width computations.
pub fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Whole hours print without decimals, anything else with one decimal.
///
/// `8.0` → `"8"`, `7.5` → `"7.5"`, `2.34` → `"2.3"`
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Share of `part` in `total` as a percentage string, e.g. `"37.5%"`.
pub fn percent_of(part: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part / total * 100.0)
}

/// Short form of an entry id used in listings and accepted by `del`.
pub fn short_id(id: &uuid::Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Horizontal bar for the dashboard trend, one block per hour (half block for .5).
pub fn hours_bar(hours: f64, scale: f64) -> String {
    let units = (hours * scale * 2.0).round() as usize;
    let mut bar = "█".repeat(units / 2);
    if units % 2 == 1 {
        bar.push('▌');
    }
    bar
}
