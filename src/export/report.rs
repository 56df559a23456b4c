// src/export/report.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{DailyEntries, TimeEntry, WeeklySummary};
use crate::ui::messages::info;
use crate::utils::date::week_dates;
use crate::utils::format_hours;
use crate::utils::formatting::percent_of;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

const REPORT_TITLE: &str = "Weekly Summary Report";

/// One summary per Monday-based week touching `[start, end]`.
/// Days outside the range are not counted and weeks without entries are skipped.
pub(crate) fn weekly_summaries(
    entries: &[TimeEntry],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<WeeklySummary> {
    let mut by_day: BTreeMap<NaiveDate, Vec<TimeEntry>> = BTreeMap::new();
    for e in entries.iter().filter(|e| e.date >= start && e.date <= end) {
        by_day.entry(e.date).or_default().push(e.clone());
    }

    let mut weeks: BTreeMap<NaiveDate, WeeklySummary> = BTreeMap::new();
    for (day, list) in by_day {
        let (monday, sunday) = week_dates(day);
        weeks
            .entry(monday)
            .or_insert_with(|| WeeklySummary::new(monday.max(start), sunday.min(end)))
            .add_daily_entries(&DailyEntries::new(day, list));
    }

    weeks.into_values().collect()
}

/// PDF report: a section per week with its total and the hours per project.
pub(crate) fn export_pdf(
    weeks: &[WeeklySummary],
    path: &Path,
    subtitle: &str,
    accent: (u8, u8, u8),
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    if weeks.is_empty() {
        return Err(AppError::NothingToExport(subtitle.to_string()));
    }

    let to_unit = |c: u8| c as f32 / 255.0;
    let mut pdf = PdfManager::new(
        REPORT_TITLE,
        (to_unit(accent.0), to_unit(accent.1), to_unit(accent.2)),
    );

    let grand_total: f64 = weeks.iter().map(|w| w.total_hours).sum();
    pdf.text_line(subtitle);
    pdf.text_line(&format!(
        "Total: {} hours over {} week(s)",
        format_hours(grand_total),
        weeks.len()
    ));

    for week in weeks {
        pdf.heading(&format!(
            "Week of {} to {}",
            week.week_start.format("%Y-%m-%d"),
            week.week_end.format("%Y-%m-%d")
        ));
        pdf.text_line(&format!(
            "Total hours: {}   Days logged: {}",
            format_hours(week.total_hours),
            week.daily_totals.len()
        ));

        let rows: Vec<Vec<String>> = week
            .by_charge_code
            .iter()
            .map(|(name, t)| {
                vec![
                    name.clone(),
                    format_hours(t.hours),
                    t.entries.to_string(),
                    percent_of(t.hours, week.total_hours),
                ]
            })
            .collect();

        pdf.table(&["Project", "Hours", "Entries", "Share"], &rows);
    }

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, code: &str, hours: f64) -> TimeEntry {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        TimeEntry::new(d, code, hours, None).unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn weeks_are_clipped_to_the_range_and_empty_weeks_skipped() {
        let entries = vec![
            entry("2025-01-03", "Alpha", 2.0), // Friday, outside range
            entry("2025-01-07", "Alpha", 4.0),
            entry("2025-01-08", "Beta", 3.5),
            entry("2025-01-22", "Alpha", 8.0),
        ];

        let weeks = weekly_summaries(&entries, d("2025-01-05"), d("2025-01-24"));

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].week_start, d("2025-01-06"));
        assert_eq!(weeks[0].week_end, d("2025-01-12"));
        assert_eq!(weeks[0].total_hours, 7.5);
        assert_eq!(weeks[0].by_charge_code["Beta"].entries, 1);

        assert_eq!(weeks[1].week_start, d("2025-01-20"));
        assert_eq!(weeks[1].week_end, d("2025-01-24"));
        assert_eq!(weeks[1].total_hours, 8.0);
    }

    #[test]
    fn partial_first_week_starts_at_range_start() {
        let entries = vec![entry("2025-01-09", "Alpha", 1.0)];
        let weeks = weekly_summaries(&entries, d("2025-01-08"), d("2025-01-31"));
        assert_eq!(weeks[0].week_start, d("2025-01-08"));
    }
}
