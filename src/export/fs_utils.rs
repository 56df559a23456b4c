// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Check whether a file can be created or overwritten.
///
/// - file missing → Ok
/// - file exists and `force` → Ok
/// - file exists without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Cancelled(
            "existing export file not overwritten".to_string(),
        ))
    }
}

/// `<export_dir>/<stem>_<YYYYmmdd_HHMMSS>.<ext>`
pub(crate) fn default_export_path(export_dir: &Path, stem: &str, ext: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    export_dir.join(format!("{stem}_{timestamp}.{ext}"))
}

/// Relative output paths are taken as given (relative to the working directory);
/// missing parent directories are created.
pub(crate) fn prepare_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
