use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use crate::store::EntryStore;
use crate::store::log::record;
use crate::utils::format_hours;
use crate::utils::formatting::short_id;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the single entry whose id starts with `id_prefix`.
    pub fn delete_entry(cfg: &Config, id_prefix: &str) -> AppResult<TimeEntry> {
        let mut store = EntryStore::open(&cfg.entries_file())?;
        let removed = store.delete_by_prefix(id_prefix)?;

        record(
            &cfg.activity_log_file(),
            "del",
            &short_id(&removed.id),
            &format!(
                "{} h on {} for '{}'",
                format_hours(removed.hours),
                removed.date,
                removed.charge_code
            ),
        );
        Ok(removed)
    }

    /// Delete every entry of `date`; returns how many were removed.
    pub fn delete_date(cfg: &Config, date: NaiveDate) -> AppResult<usize> {
        let mut store = EntryStore::open(&cfg.entries_file())?;
        let removed = store.delete_date(date)?;

        if removed > 0 {
            record(
                &cfg.activity_log_file(),
                "del",
                &date.to_string(),
                &format!("{removed} entries deleted"),
            );
        }
        Ok(removed)
    }

    /// Find the entry a prefix designates without deleting it.
    pub fn lookup(cfg: &Config, id_prefix: &str) -> AppResult<TimeEntry> {
        let store = EntryStore::open(&cfg.entries_file())?;
        store.find_by_prefix(id_prefix).cloned()
    }
}

/// "Clear All Data"
pub struct ClearLogic;

impl ClearLogic {
    pub fn apply(cfg: &Config) -> AppResult<usize> {
        let mut store = EntryStore::open(&cfg.entries_file())?;
        let removed = store.clear_all()?;

        tracing::info!(removed, "all entries cleared");
        record(
            &cfg.activity_log_file(),
            "clear",
            &cfg.entries_file().display().to_string(),
            &format!("{removed} entries deleted"),
        );
        Ok(removed)
    }
}
