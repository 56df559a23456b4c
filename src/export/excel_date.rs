// src/export/excel_date.rs

use chrono::NaiveDate;

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Excel serial number of a date (days since 1899-12-30).
pub(crate) fn excel_serial(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (date - epoch).num_days() as f64
}
