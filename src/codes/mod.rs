//! Charge code manager: finds the newest code file in the configured directory,
//! loads it and resolves the friendly names users type.

mod reader;

pub use reader::read_charge_codes;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ChargeCode;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

pub struct ChargeCodeBook {
    dir: PathBuf,
    patterns: Vec<String>,
    codes: Vec<ChargeCode>,
    source: Option<PathBuf>,
    last_modified: Option<SystemTime>,
}

impl ChargeCodeBook {
    pub fn new(cfg: &Config) -> Self {
        Self {
            dir: cfg.charge_codes_dir(),
            patterns: cfg.files.charge_code_patterns.clone(),
            codes: Vec::new(),
            source: None,
            last_modified: None,
        }
    }

    /// Load the newest charge code file, failing when there is none or when it
    /// holds no usable row.
    pub fn load_required(cfg: &Config) -> AppResult<Self> {
        let mut book = Self::new(cfg);
        book.refresh_if_needed()?;

        let Some(source) = &book.source else {
            return Err(AppError::NoChargeCodeFile(book.dir.display().to_string()));
        };
        if book.codes.is_empty() {
            return Err(AppError::NoChargeCodes(source.display().to_string()));
        }
        Ok(book)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Most recently modified file matching one of the configured patterns.
    pub fn find_charge_code_file(&self) -> AppResult<Option<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(None);
        }

        let matchers: Vec<Regex> = self
            .patterns
            .iter()
            .filter_map(|p| glob_to_regex(p))
            .collect();

        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for dir_entry in fs::read_dir(&self.dir)? {
            let path = dir_entry?.path();
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name() {
                Some(n) => n.to_string_lossy().to_string(),
                None => continue,
            };
            if !matchers.iter().any(|re| re.is_match(&name)) {
                continue;
            }

            let modified = fs::metadata(&path)?.modified()?;
            let is_newer = match &newest {
                None => true,
                Some((t, p)) => modified > *t || (modified == *t && path > *p),
            };
            if is_newer {
                newest = Some((modified, path));
            }
        }

        Ok(newest.map(|(_, p)| p))
    }

    /// Replace the loaded codes with the content of `path`.
    pub fn load_charge_codes(&mut self, path: &Path) -> AppResult<&[ChargeCode]> {
        let codes = read_charge_codes(path)?;
        self.codes = codes;
        self.source = Some(path.to_path_buf());
        self.last_modified = fs::metadata(path).and_then(|m| m.modified()).ok();
        Ok(&self.codes)
    }

    /// Reload when the newest file changed or was modified since the last load.
    /// Returns true when a reload happened.
    pub fn refresh_if_needed(&mut self) -> AppResult<bool> {
        let Some(path) = self.find_charge_code_file()? else {
            return Ok(false);
        };

        let modified = fs::metadata(&path)?.modified()?;
        let stale = self.source.as_deref() != Some(path.as_path())
            || self.last_modified.is_none_or(|t| modified > t);

        if stale {
            self.load_charge_codes(&path)?;
        }
        Ok(stale)
    }

    pub fn codes(&self) -> &[ChargeCode] {
        &self.codes
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&ChargeCode> {
        self.codes.iter().find(|c| c.matches_name(name))
    }

    pub fn active_codes(&self) -> impl Iterator<Item = &ChargeCode> {
        self.codes.iter().filter(|c| c.active)
    }

    /// Resolve what the user typed to a selectable code.
    ///
    /// Exact (case-insensitive) name first, then a unique active code whose
    /// name starts with the query, then a unique one containing it.
    pub fn resolve(&self, query: &str) -> AppResult<&ChargeCode> {
        let q = query.trim();

        if let Some(code) = self.get(q) {
            if !code.active {
                return Err(AppError::InactiveChargeCode(code.friendly_name.clone()));
            }
            return Ok(code);
        }

        let needle = q.to_lowercase();
        if !needle.is_empty() {
            let prefixed: Vec<&ChargeCode> = self
                .active_codes()
                .filter(|c| c.friendly_name.to_lowercase().starts_with(&needle))
                .collect();
            let candidates = if prefixed.is_empty() {
                self.active_codes()
                    .filter(|c| c.friendly_name.to_lowercase().contains(&needle))
                    .collect()
            } else {
                prefixed
            };

            match candidates.as_slice() {
                [one] => return Ok(*one),
                [] => {}
                many => {
                    return Err(AppError::AmbiguousChargeCode {
                        query: q.to_string(),
                        candidates: many.iter().map(|c| c.friendly_name.clone()).collect(),
                    });
                }
            }
        }

        Err(AppError::UnknownChargeCode {
            name: q.to_string(),
            suggestion: self.suggest(q),
        })
    }

    fn suggest(&self, query: &str) -> Option<String> {
        let q = query.to_lowercase();
        self.active_codes()
            .map(|c| {
                let score = strsim::jaro_winkler(&q, &c.friendly_name.to_lowercase());
                (score, &c.friendly_name)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, name)| name.clone())
    }
}

/// `*.xlsx` → `(?i)^.*\.xlsx$`; `?` matches one character.
fn glob_to_regex(pattern: &str) -> Option<Regex> {
    let mut re = String::from("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            other => re.push_str(&regex::escape(&other.to_string())),
        }
    }
    re.push('$');

    match Regex::new(&re) {
        Ok(r) => Some(r),
        Err(e) => {
            tracing::warn!(pattern, error = %e, "ignoring invalid charge code pattern");
            None
        }
    }
}
