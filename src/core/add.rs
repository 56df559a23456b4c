use crate::codes::ChargeCodeBook;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::models::time_entry::{HOURS_TOLERANCE, validate_hours};
use crate::store::EntryStore;
use crate::store::log::record;
use crate::ui::messages::{success, warning};
use crate::utils::colors::{RESET, color_for_total};
use crate::utils::date::{long_date, parse_date, today};
use crate::utils::format_hours;
use crate::utils::formatting::short_id;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Log `hours` (default `features.default_hours`) on `date` (default today)
    /// against the charge code `code_query` resolves to.
    pub fn apply(
        cfg: &Config,
        code_query: &str,
        hours: Option<f64>,
        date: Option<&str>,
        notes: Option<String>,
    ) -> AppResult<TimeEntry> {
        let hours = hours.unwrap_or(cfg.features.default_hours);
        validate_hours(hours)?;

        let date = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => today(),
        };
        if date > today() {
            return Err(AppError::FutureDate(date.to_string()));
        }

        let notes = if cfg.features.enable_notes {
            notes
        } else {
            if notes.is_some() {
                warning("Notes are disabled in the configuration and were not saved.");
            }
            None
        };

        let book = ChargeCodeBook::load_required(cfg)?;
        let code = book.resolve(code_query)?;

        let entry = TimeEntry::new(date, code.friendly_name.clone(), hours, notes)?;

        let mut store = EntryStore::open(&cfg.entries_file())?;
        store.add_entry(entry.clone(), cfg.features.max_hours_per_day)?;

        tracing::info!(id = %entry.id, code = %entry.charge_code, hours, "entry added");
        record(
            &cfg.activity_log_file(),
            "add",
            &short_id(&entry.id),
            &format!(
                "{} h on {} for '{}'",
                format_hours(hours),
                entry.date,
                entry.charge_code
            ),
        );

        let day_total = store.daily_entries(date).total_hours;
        Self::print(cfg, &entry, day_total);

        Ok(entry)
    }

    fn print(cfg: &Config, entry: &TimeEntry, day_total: f64) {
        let max = cfg.features.max_hours_per_day;

        success(format!(
            "Logged {} h for '{}' on {} [{}]",
            format_hours(entry.hours),
            entry.charge_code,
            long_date(entry.date),
            short_id(&entry.id)
        ));
        println!(
            "   Day total: {}{}{} / {} h",
            color_for_total(day_total, max),
            format_hours(day_total),
            RESET,
            format_hours(max)
        );

        if max - day_total <= HOURS_TOLERANCE {
            warning(format!(
                "Daily limit of {} hours reached for {}.",
                format_hours(max),
                entry.date
            ));
        }
    }
}
