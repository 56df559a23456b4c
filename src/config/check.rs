//! Configuration checks: keys missing from the file and values that are out of range.

use super::Config;
use crate::errors::AppResult;
use crate::utils::colors::parse_hex_color;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// The key is absent from the file; the default value is used.
    Missing(String),
    /// The key is present but its value cannot be used.
    Invalid { key: String, reason: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::Missing(key) => write!(f, "missing '{key}' (default value used)"),
            ConfigIssue::Invalid { key, reason } => write!(f, "invalid '{key}': {reason}"),
        }
    }
}

/// Compare the file at `path` with the default layout and validate `cfg`.
pub fn check(path: &Path, cfg: &Config) -> AppResult<Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    let defaults = toml::Value::try_from(Config::default())
        .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;

    let on_disk: toml::Value = if path.exists() {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        toml::Value::Table(Default::default())
    };

    collect_missing("", &defaults, &on_disk, &mut issues);
    validate(cfg, &mut issues);

    Ok(issues)
}

fn collect_missing(
    prefix: &str,
    expected: &toml::Value,
    actual: &toml::Value,
    issues: &mut Vec<ConfigIssue>,
) {
    let Some(expected) = expected.as_table() else {
        return;
    };

    for (key, value) in expected {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match actual.get(key) {
            None => issues.push(ConfigIssue::Missing(full)),
            Some(found) if value.is_table() => collect_missing(&full, value, found, issues),
            Some(_) => {}
        }
    }
}

fn validate(cfg: &Config, issues: &mut Vec<ConfigIssue>) {
    let max = cfg.features.max_hours_per_day;
    if !(max > 0.0 && max <= 24.0) {
        issues.push(ConfigIssue::Invalid {
            key: "features.max_hours_per_day".into(),
            reason: format!("{max} is not within (0, 24]"),
        });
    }

    let def = cfg.features.default_hours;
    if !(def > 0.0 && def <= max) {
        issues.push(ConfigIssue::Invalid {
            key: "features.default_hours".into(),
            reason: format!("{def} is not within (0, {max}]"),
        });
    }

    for (key, color) in [
        ("ui.primary_color", &cfg.ui.primary_color),
        ("ui.secondary_color", &cfg.ui.secondary_color),
    ] {
        if parse_hex_color(color).is_none() {
            issues.push(ConfigIssue::Invalid {
                key: key.into(),
                reason: format!("'{color}' is not a #RRGGBB colour"),
            });
        }
    }

    if cfg.files.charge_code_patterns.is_empty() {
        issues.push(ConfigIssue::Invalid {
            key: "files.charge_code_patterns".into(),
            reason: "no patterns configured".into(),
        });
    }
}
