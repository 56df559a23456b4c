use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
pub const ACTIVITY_LOG_FILE: &str = "activity.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app: AppSection,
    pub paths: PathsSection,
    pub files: FilesSection,
    pub features: FeaturesSection,
    pub ui: UiSection,

    /// Directory relative `[paths]` entries are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    pub version: String,
    pub organization: String,
    pub team: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub charge_codes_dir: String,
    pub data_dir: String,
    pub export_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesSection {
    pub charge_code_patterns: Vec<String>,
    pub time_entries_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub max_hours_per_day: f64,
    pub default_hours: f64,
    pub enable_notes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "Timesheet Simplifier".to_string(),
            version: "1.0.0".to_string(),
            organization: "Your Organization".to_string(),
            team: "Your Team".to_string(),
        }
    }
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            charge_codes_dir: "./charge_codes".to_string(),
            data_dir: "./data".to_string(),
            export_dir: "./exports".to_string(),
        }
    }
}

impl Default for FilesSection {
    fn default() -> Self {
        Self {
            charge_code_patterns: vec!["*.xlsx".into(), "*.xls".into(), "*.csv".into()],
            time_entries_file: "time_entries.json".to_string(),
        }
    }
}

impl Default for FeaturesSection {
    fn default() -> Self {
        Self {
            max_hours_per_day: 24.0,
            default_hours: 8.0,
            enable_notes: true,
        }
    }
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            primary_color: "#1f77b4".to_string(),
            secondary_color: "#ff7f0e".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppSection::default(),
            paths: PathsSection::default(),
            files: FilesSection::default(),
            features: FeaturesSection::default(),
            ui: UiSection::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults if the file is missing.
    /// Sections or keys absent from the file keep their default values.
    pub fn load(path: &Path) -> AppResult<Self> {
        let mut cfg = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        cfg.base_dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(cfg)
    }

    /// Write the default configuration to `path` unless a file already exists.
    /// Returns true when a new file was written.
    pub fn write_default(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let body = Config::default().to_toml_string()?;
        let content = format!(
            "# Timesheet Simplifier configuration\n\
             # Relative paths are resolved against the directory of this file.\n\n{body}"
        );
        fs::write(path, content)?;
        Ok(true)
    }

    pub fn to_toml_string(&self) -> AppResult<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Dotted-key lookup such as `app.organization` or `features.max_hours_per_day`.
    pub fn get(&self, key: &str) -> Option<toml::Value> {
        let mut value = toml::Value::try_from(self).ok()?;
        for part in key.split('.') {
            value = value.as_table()?.get(part)?.clone();
        }
        Some(value)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, p: &str) -> PathBuf {
        let path = expand_tilde(p);
        if path.is_absolute() {
            path
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn charge_codes_dir(&self) -> PathBuf {
        self.resolve(&self.paths.charge_codes_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.paths.data_dir)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.resolve(&self.paths.export_dir)
    }

    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join(&self.files.time_entries_file)
    }

    pub fn activity_log_file(&self) -> PathBuf {
        self.data_dir().join(ACTIVITY_LOG_FILE)
    }

    /// Create the charge code, data and export directories if missing.
    pub fn ensure_directories(&self) -> AppResult<()> {
        for dir in [self.charge_codes_dir(), self.data_dir(), self.export_dir()] {
            fs::create_dir_all(&dir)?;
        }
        Ok(())
    }
}
