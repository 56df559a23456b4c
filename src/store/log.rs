//! Append-only activity log, one JSON object per line.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the activity log file.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let record = LogRecord {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&record)?)?;
    Ok(())
}

/// Record an operation that has already completed. A log that cannot be
/// written only produces a warning.
pub fn record(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        tracing::warn!(path = %path.display(), operation, error = %e, "activity log not written");
        warning(format!("Could not write the activity log: {e}"));
    }
}

/// Read every record; unreadable lines are skipped.
pub fn read_log(path: &Path) -> AppResult<Vec<LogRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let records = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| match serde_json::from_str::<LogRecord>(l) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed activity log line");
                None
            }
        })
        .collect();
    Ok(records)
}
