use crate::codes::ChargeCodeBook;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{describe_period, resolve_period};
use crate::models::TimeEntry;
use crate::store::EntryStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, Theme, color_for_total};
use crate::utils::date::long_date;
use crate::utils::format_hours;
use crate::utils::formatting::short_id;
use crate::utils::table::Table;
use chrono::NaiveDate;

const DEFAULT_HISTORY_DAYS: i64 = 14;

/// Entries of a period, newest first, optionally for one friendly name.
pub struct HistoryLogic;

impl HistoryLogic {
    pub fn load(
        store: &EntryStore,
        start: NaiveDate,
        end: NaiveDate,
        code: Option<&str>,
    ) -> Vec<TimeEntry> {
        let mut entries: Vec<TimeEntry> = store
            .entries_for_range(start, end)
            .into_iter()
            .filter(|e| code.is_none_or(|c| e.charge_code.eq_ignore_ascii_case(c.trim())))
            .collect();

        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        entries
    }

    pub fn print(
        cfg: &Config,
        range: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
        code: Option<&str>,
        details: bool,
    ) -> AppResult<()> {
        let store = EntryStore::open(&cfg.entries_file())?;
        let (start, end) = resolve_period(range, from, to, DEFAULT_HISTORY_DAYS, store.bounds())?;
        let entries = Self::load(&store, start, end, code);

        let theme = Theme::from_ui(&cfg.ui);
        header(&theme, format!("📅 Time Entry History ({})", describe_period(start, end)));

        if entries.is_empty() {
            info("No entries found for the selected date range.");
            return Ok(());
        }

        // Details need the code list; history still prints without it.
        let book = if details {
            let mut book = ChargeCodeBook::new(cfg);
            if let Err(e) = book.refresh_if_needed() {
                tracing::warn!(error = %e, "charge codes unavailable");
            }
            Some(book)
        } else {
            None
        };

        let max = cfg.features.max_hours_per_day;
        let mut grand_total = 0.0;

        for day in entries.chunk_by(|a, b| a.date == b.date) {
            let date = day[0].date;
            let total: f64 = day.iter().map(|e| e.hours).sum();
            grand_total += total;

            println!(
                "\n{}  {}{} h{}",
                theme.accent(&long_date(date)),
                color_for_total(total, max),
                format_hours(total),
                RESET
            );

            let mut headers = vec!["ID", "Project", "Hours", "Notes"];
            if details {
                headers.push("Charge Code");
            }
            let mut table = Table::with_headers(&headers);

            for e in day {
                let mut row = vec![
                    short_id(&e.id),
                    e.charge_code.clone(),
                    format_hours(e.hours),
                    e.notes.clone().unwrap_or_else(|| "-".to_string()),
                ];
                if let Some(book) = &book {
                    row.push(match book.get(&e.charge_code) {
                        Some(c) => c.full_code_string(),
                        None => format!("{GREY}not in current charge code file{RESET}"),
                    });
                }
                table.add_row(row);
            }
            print!("{}", table.render());
        }

        println!();
        info(format!(
            "{} entries, {} hours",
            entries.len(),
            format_hours(grand_total)
        ));
        Ok(())
    }
}
