//! Unified application error type.
//! All modules (config, codes, store, core, export) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet read error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD, 'today' or 'yesterday')")]
    InvalidDate(String),

    #[error("Invalid hours: {0} (must be greater than 0 and at most 24)")]
    InvalidHours(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Charge codes
    // ---------------------------
    #[error(
        "No charge code file found in '{0}'. Please ask your manager for the charge code file \
         (.xlsx, .xls or .csv) and place it in that directory."
    )]
    NoChargeCodeFile(String),

    #[error("No valid charge codes found in '{0}'. Please check the file format.")]
    NoChargeCodes(String),

    #[error("Unsupported charge code file type: {0}")]
    UnsupportedCodeFile(String),

    #[error("Unknown charge code '{name}'{}", suggestion_hint(.suggestion))]
    UnknownChargeCode {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Charge code '{0}' is inactive and cannot be selected")]
    InactiveChargeCode(String),

    #[error("'{query}' matches several charge codes: {}", .candidates.join(", "))]
    AmbiguousChargeCode {
        query: String,
        candidates: Vec<String>,
    },

    // ---------------------------
    // Entry logic errors
    // ---------------------------
    #[error(
        "Cannot add entry: {date} would total {total} hours, above the daily limit of {max} hours"
    )]
    DailyLimitExceeded {
        date: String,
        total: String,
        max: String,
    },

    #[error("No time entry found with id '{0}'")]
    EntryNotFound(String),

    #[error("Id prefix '{0}' matches more than one entry, use more characters")]
    AmbiguousEntryId(String),

    #[error("Cannot log time in the future: {0}")]
    FutureDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No entries to export for {0}")]
    NothingToExport(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

pub type AppResult<T> = Result<T, AppError>;
