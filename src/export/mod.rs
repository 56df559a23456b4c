// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
pub mod range;
mod report;
mod xlsx;

pub use logic::{ExportLogic, ExportOptions};
pub use model::{DetailedRow, SimpleRow};
pub use range::{describe_period, parse_range, resolve_period};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    /// Weekly summary report
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// File name stem used when no output file is given.
    pub fn default_stem(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "weekly_summary",
            _ => "time_entries",
        }
    }
}
