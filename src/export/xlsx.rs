// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{DATE_FORMAT, excel_serial};
use crate::export::model::{DetailedRow, component_cells, detailed_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) const SHEET_NAME: &str = "Time Entries";

/// Detailed XLSX export: styled header in `header_rgb`, banded rows,
/// frozen header and automatic column widths.
pub(crate) fn export_xlsx(rows: &[DetailedRow], path: &Path, header_rgb: u32) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = detailed_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(header_rgb))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };
        let mut cells = RowWriter {
            worksheet: &mut *worksheet,
            row,
            band,
            widths: &mut col_widths,
        };

        cells.date(0, r)?;
        cells.text(1, &r.friendly_name)?;
        cells.number(2, Some(r.hours))?;
        cells.text(3, &r.notes)?;
        cells.number(4, r.percent)?;
        for (i, value) in component_cells(r).into_iter().enumerate() {
            cells.text(5 + i as u16, value.as_deref().unwrap_or(""))?;
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Writes the cells of one banded row and tracks column widths.
struct RowWriter<'a> {
    worksheet: &'a mut Worksheet,
    row: u32,
    band: Color,
    widths: &'a mut Vec<usize>,
}

impl RowWriter<'_> {
    fn base(&self) -> Format {
        Format::new()
            .set_background_color(self.band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
    }

    fn track(&mut self, col: u16, shown: &str) {
        let w = &mut self.widths[col as usize];
        *w = (*w).max(UnicodeWidthStr::width(shown));
    }

    fn date(&mut self, col: u16, r: &DetailedRow) -> AppResult<()> {
        let fmt = self.base().set_num_format(DATE_FORMAT);
        self.worksheet
            .write_with_format(self.row, col, excel_serial(r.date), &fmt)?;
        self.track(col, DATE_FORMAT);
        Ok(())
    }

    fn number(&mut self, col: u16, value: Option<f64>) -> AppResult<()> {
        let fmt = self.base().set_align(FormatAlign::Right);
        match value {
            Some(v) => {
                self.worksheet.write_with_format(self.row, col, v, &fmt)?;
                self.track(col, &v.to_string());
            }
            None => {
                self.worksheet.write_blank(self.row, col, &fmt)?;
            }
        }
        Ok(())
    }

    fn text(&mut self, col: u16, value: &str) -> AppResult<()> {
        let fmt = self.base();
        if value.is_empty() {
            self.worksheet.write_blank(self.row, col, &fmt)?;
        } else {
            self.worksheet.write_with_format(self.row, col, value, &fmt)?;
            self.track(col, value);
        }
        Ok(())
    }
}
