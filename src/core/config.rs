use crate::config::Config;
use crate::config::check::{ConfigIssue, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the file as written, or the effective defaults when there is none.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        if path.exists() {
            println!("{}", fs::read_to_string(path)?);
        } else {
            warning("Configuration file not found, showing defaults.");
            println!("{}", cfg.to_toml_string()?);
        }
        Ok(())
    }

    /// Missing keys are reported as warnings, invalid values as errors.
    pub fn check(path: &Path, cfg: &Config) -> AppResult<Vec<ConfigIssue>> {
        let issues = check(path, cfg)?;

        if issues.is_empty() {
            success(format!("Configuration OK: {}", path.display()));
        }
        for issue in &issues {
            match issue {
                ConfigIssue::Missing(_) => warning(issue),
                ConfigIssue::Invalid { .. } => error(issue),
            }
        }
        Ok(issues)
    }

    pub fn get(cfg: &Config, key: &str) -> AppResult<()> {
        let value = cfg
            .get(key)
            .ok_or_else(|| AppError::Config(format!("unknown key '{key}'")))?;

        match value {
            toml::Value::String(s) => println!("{s}"),
            other => println!("{other}"),
        }
        Ok(())
    }

    /// Open `path` in `editor`, `$EDITOR`/`$VISUAL`, or the platform default,
    /// falling back to the default when the requested editor fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            Config::write_default(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                return Ok(());
            }
            _ if editor_to_use == default_editor => {
                return Err(AppError::Config(format!(
                    "failed to run editor '{editor_to_use}'"
                )));
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{default_editor}'"
            ))),
        }
    }
}
