// src/codes/reader.rs

use crate::errors::{AppError, AppResult};
use crate::models::ChargeCode;
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashSet;
use std::path::Path;

/// Accepted header names per field, after normalisation
/// (trimmed, lowercase, spaces replaced by `_`).
const COLUMN_ALIASES: &[(&str, &[&str])] = &[
    (
        "friendly_name",
        &["friendly_name", "name", "project_name", "task_name"],
    ),
    ("percent", &["percent", "percentage", "%"]),
    ("task_source", &["task_source", "source"]),
    ("task", &["task"]),
    ("sub_task", &["sub_task", "subtask"]),
    ("operating_unit", &["operating_unit", "unit"]),
    ("process", &["process"]),
    ("project", &["project", "project_code"]),
    ("activity", &["activity"]),
    ("customer_segment", &["customer_segment", "segment"]),
    ("full_code", &["full_code", "charge_code", "code"]),
    ("active", &["active"]),
];

/// Raw sheet: normalised headers and string cells (`None` when empty).
struct RawSheet {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

/// Parse a charge code file, dispatching on the extension.
pub fn read_charge_codes(path: &Path) -> AppResult<Vec<ChargeCode>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let sheet = match ext.as_str() {
        "csv" => read_csv(path)?,
        "xlsx" | "xls" | "xlsm" => read_spreadsheet(path)?,
        other => return Err(AppError::UnsupportedCodeFile(format!(".{other}"))),
    };

    let codes = map_rows(&sheet);
    tracing::info!(path = %path.display(), codes = codes.len(), "charge codes loaded");
    Ok(codes)
}

fn read_csv(path: &Path) -> AppResult<RawSheet> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(non_empty).collect());
    }

    Ok(RawSheet { headers, rows })
}

fn read_spreadsheet(path: &Path) -> AppResult<RawSheet> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r?,
        None => {
            return Err(AppError::NoChargeCodes(path.display().to_string()));
        }
    };

    let mut iter = range.rows();
    let headers = match iter.next() {
        Some(first) => first
            .iter()
            .map(|c| normalize_header(&c.to_string()))
            .collect(),
        None => Vec::new(),
    };

    let rows = iter.map(|r| r.iter().map(cell_text).collect()).collect();

    Ok(RawSheet { headers, rows })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => non_empty(&other.to_string()),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Map raw rows to charge codes. Rows without a friendly name are skipped and
/// later duplicates of a friendly name (case-insensitive) are ignored.
fn map_rows(sheet: &RawSheet) -> Vec<ChargeCode> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();

    for row in &sheet.rows {
        let field = |name: &str| lookup(sheet, row, name);

        let Some(friendly_name) = field("friendly_name") else {
            continue;
        };

        if !seen.insert(friendly_name.to_lowercase()) {
            tracing::warn!(name = %friendly_name, "duplicate friendly name ignored");
            continue;
        }

        let mut code = ChargeCode::new(friendly_name);
        code.percent = field("percent").and_then(|p| parse_percent(&p));
        code.task_source = field("task_source");
        code.task = field("task");
        code.sub_task = field("sub_task");
        code.operating_unit = field("operating_unit");
        code.process = field("process");
        code.project = field("project");
        code.activity = field("activity");
        code.customer_segment = field("customer_segment");
        code.full_code = field("full_code");
        code.active = field("active").map(|a| parse_active(&a)).unwrap_or(true);

        codes.push(code);
    }

    codes
}

/// First non-empty value among the aliases of `field` present in the headers.
fn lookup(sheet: &RawSheet, row: &[Option<String>], field: &str) -> Option<String> {
    let (_, aliases) = COLUMN_ALIASES.iter().find(|(f, _)| *f == field)?;

    aliases.iter().find_map(|alias| {
        let idx = sheet.headers.iter().position(|h| h == alias)?;
        row.get(idx).cloned().flatten()
    })
}

fn parse_percent(s: &str) -> Option<f64> {
    match s.trim_end_matches('%').trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(value = %s, "ignoring non-numeric percent");
            None
        }
    }
}

fn parse_active(s: &str) -> bool {
    !matches!(
        s.trim().to_lowercase().as_str(),
        "no" | "n" | "false" | "0" | "inactive"
    )
}
