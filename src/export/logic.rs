// src/export/logic.rs

use crate::codes::ChargeCodeBook;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{default_export_path, ensure_writable, prepare_parent};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DetailedRow, SimpleRow};
use crate::export::range::{describe_period, resolve_period};
use crate::export::report::{export_pdf, weekly_summaries};
use crate::export::xlsx::export_xlsx;
use crate::models::TimeEntry;
use crate::store::EntryStore;
use crate::store::log::record;
use crate::ui::messages::{header, info};
use crate::utils::colors::{Theme, parse_hex_color};
use crate::utils::format_hours;
use crate::utils::table::Table;
use std::path::PathBuf;

const DEFAULT_EXPORT_DAYS: i64 = 14;
const PREVIEW_ROWS: usize = 10;
const FALLBACK_HEADER_RGB: (u8, u8, u8) = (0x1f, 0x77, 0xb4);

/// Command-line options of `tsheet export`.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub file: Option<String>,
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub force: bool,
    pub preview: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries of the selected period.
    ///
    /// Returns the written file, or `None` in preview mode.
    pub fn export(cfg: &Config, opts: &ExportOptions) -> AppResult<Option<PathBuf>> {
        let store = EntryStore::open(&cfg.entries_file())?;

        let (start, end) = resolve_period(
            opts.range.as_deref(),
            opts.from.as_deref(),
            opts.to.as_deref(),
            DEFAULT_EXPORT_DAYS,
            store.bounds(),
        )?;
        let period = describe_period(start, end);

        let entries = store.entries_for_range(start, end);
        if entries.is_empty() {
            return Err(AppError::NothingToExport(period));
        }

        // Codes only enrich the detailed formats; an export works without them.
        let mut book = ChargeCodeBook::new(cfg);
        if let Err(e) = book.refresh_if_needed() {
            tracing::warn!(error = %e, "charge codes unavailable, exporting without details");
        }

        if opts.preview {
            print_preview(cfg, &entries, &book, &period);
            return Ok(None);
        }

        let path = match &opts.file {
            Some(f) => PathBuf::from(f),
            None => default_export_path(
                &cfg.export_dir(),
                opts.format.default_stem(),
                opts.format.as_str(),
            ),
        };

        ensure_writable(&path, opts.force)?;
        prepare_parent(&path)?;

        let header_rgb = parse_hex_color(&cfg.ui.primary_color).unwrap_or(FALLBACK_HEADER_RGB);

        match opts.format {
            ExportFormat::Csv => {
                let rows: Vec<SimpleRow> = entries.iter().map(SimpleRow::from_entry).collect();
                export_csv(&rows, &path)?
            }
            ExportFormat::Json => {
                let rows = detailed_rows(&entries, &book);
                export_json(&rows, &path)?
            }
            ExportFormat::Xlsx => {
                let rows = detailed_rows(&entries, &book);
                let (r, g, b) = header_rgb;
                let rgb = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
                export_xlsx(&rows, &path, rgb)?
            }
            ExportFormat::Pdf => {
                let weeks = weekly_summaries(&entries, start, end);
                let subtitle = format!("{} - {}: {period}", cfg.app.organization, cfg.app.team);
                export_pdf(&weeks, &path, &subtitle, header_rgb)?
            }
        }

        tracing::info!(
            format = opts.format.as_str(),
            entries = entries.len(),
            path = %path.display(),
            "export written"
        );
        record(
            &cfg.activity_log_file(),
            "export",
            &path.display().to_string(),
            &format!(
                "{} entries ({period}) as {}",
                entries.len(),
                opts.format.as_str()
            ),
        );

        Ok(Some(path))
    }
}

fn detailed_rows(entries: &[TimeEntry], book: &ChargeCodeBook) -> Vec<DetailedRow> {
    entries
        .iter()
        .map(|e| DetailedRow::from_entry(e, book))
        .collect()
}

fn print_preview(cfg: &Config, entries: &[TimeEntry], book: &ChargeCodeBook, period: &str) {
    let theme = Theme::from_ui(&cfg.ui);
    let title = if entries.len() > PREVIEW_ROWS {
        format!("Export preview ({period}), first {PREVIEW_ROWS} of {}", entries.len())
    } else {
        format!("Export preview ({period})")
    };
    header(&theme, title);

    let mut table = Table::with_headers(&["Date", "Friendly Name", "Hours", "Notes", "Charge Code"]);
    for e in entries.iter().take(PREVIEW_ROWS) {
        let code = match book.get(&e.charge_code) {
            Some(c) => c.full_code_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            e.date.format("%Y-%m-%d").to_string(),
            e.charge_code.clone(),
            format_hours(e.hours),
            e.notes.clone().unwrap_or_default(),
            code,
        ]);
    }
    print!("{}", table.render());

    let total: f64 = entries.iter().map(|e| e.hours).sum();
    info(format!(
        "{} entries, {} hours. Nothing written.",
        entries.len(),
        format_hours(total)
    ));
}
