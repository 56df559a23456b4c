use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::EntryStore;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, Theme, color_for_total};
use crate::utils::date::{long_date, parse_date, today};
use crate::utils::format_hours;
use crate::utils::formatting::short_id;
use crate::utils::table::Table;

/// Day view: the entries of one date and the total against the daily limit.
pub struct TodayLogic;

impl TodayLogic {
    pub fn print(cfg: &Config, date: Option<&str>) -> AppResult<()> {
        let date = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => today(),
        };

        let store = EntryStore::open(&cfg.entries_file())?;
        let daily = store.daily_entries(date);
        let max = cfg.features.max_hours_per_day;

        let theme = Theme::from_ui(&cfg.ui);
        header(&theme, format!("📝 {}", long_date(date)));

        if daily.entries.is_empty() {
            info("No entries for this day yet.");
        } else {
            let mut table = Table::with_headers(&["ID", "Project", "Hours", "Notes"]);
            for e in &daily.entries {
                table.add_row(vec![
                    short_id(&e.id),
                    e.charge_code.clone(),
                    format_hours(e.hours),
                    e.notes.clone().unwrap_or_else(|| "-".to_string()),
                ]);
            }
            print!("{}", table.render());
        }

        println!(
            "\nTotal: {}{}{} / {} h",
            color_for_total(daily.total_hours, max),
            format_hours(daily.total_hours),
            RESET,
            format_hours(max)
        );

        if !daily.validate_total_hours(max) {
            warning("Total hours exceed the configured daily limit.");
        } else if daily.total_hours >= max {
            warning("Daily limit reached.");
        }
        Ok(())
    }
}
