//! Time entries persisted as pretty JSON keyed by ISO date.
//!
//! ```json
//! { "2025-01-06": [ { "id": "…", "date": "2025-01-06", "charge_code": "Alpha", "hours": 8.0, … } ] }
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::exceeds_limit;
use crate::models::{DailyEntries, TimeEntry, WeeklySummary};
use crate::utils::format_hours;
use crate::utils::date::days_between;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct EntryStore {
    path: PathBuf,
    entries: BTreeMap<NaiveDate, Vec<TimeEntry>>,
}

impl EntryStore {
    /// Open the store at `path`. A missing file is an empty store; a malformed
    /// file is an error and is left untouched.
    pub fn open(path: &Path) -> AppResult<Self> {
        let entries = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        let store = Self {
            path: path.to_path_buf(),
            entries,
        };
        tracing::debug!(path = %path.display(), entries = store.count(), "entry store opened");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file and rename it over the store.
    pub fn save(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), entries = self.count(), "entry store saved");
        Ok(())
    }

    /// Append `entry` unless the day's total would exceed `max_hours_per_day`.
    pub fn add_entry(&mut self, entry: TimeEntry, max_hours_per_day: f64) -> AppResult<()> {
        let day_total = self.daily_entries(entry.date).total_hours + entry.hours;

        if exceeds_limit(day_total, max_hours_per_day) {
            return Err(AppError::DailyLimitExceeded {
                date: entry.date.to_string(),
                total: format_hours(day_total),
                max: format_hours(max_hours_per_day),
            });
        }

        self.entries.entry(entry.date).or_default().push(entry);
        self.save()
    }

    pub fn find(&self, id: &Uuid) -> Option<&TimeEntry> {
        self.entries.values().flatten().find(|e| &e.id == id)
    }

    /// Find a single entry by a prefix of its id (hyphens ignored).
    pub fn find_by_prefix(&self, prefix: &str) -> AppResult<&TimeEntry> {
        let needle = prefix.trim().replace('-', "").to_lowercase();
        if needle.is_empty() {
            return Err(AppError::EntryNotFound(prefix.to_string()));
        }

        let mut matches = self
            .entries
            .values()
            .flatten()
            .filter(|e| e.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(e), None) => Ok(e),
            (None, _) => Err(AppError::EntryNotFound(prefix.to_string())),
            (Some(_), Some(_)) => Err(AppError::AmbiguousEntryId(prefix.to_string())),
        }
    }

    /// Remove one entry, returning it.
    pub fn delete_entry(&mut self, id: &Uuid) -> AppResult<TimeEntry> {
        let date = self
            .find(id)
            .map(|e| e.date)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        let list = self.entries.entry(date).or_default();
        let pos = list
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;
        let removed = list.remove(pos);

        if list.is_empty() {
            self.entries.remove(&date);
        }

        self.save()?;
        Ok(removed)
    }

    pub fn delete_by_prefix(&mut self, prefix: &str) -> AppResult<TimeEntry> {
        let id = self.find_by_prefix(prefix)?.id;
        self.delete_entry(&id)
    }

    /// Remove every entry logged on `date`; returns how many were removed.
    pub fn delete_date(&mut self, date: NaiveDate) -> AppResult<usize> {
        let removed = self.entries.remove(&date).map(|v| v.len()).unwrap_or(0);
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Remove every entry; returns how many were removed.
    pub fn clear_all(&mut self) -> AppResult<usize> {
        let removed = self.count();
        self.entries.clear();
        self.save()?;
        Ok(removed)
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> Vec<TimeEntry> {
        self.entries.get(&date).cloned().unwrap_or_default()
    }

    pub fn daily_entries(&self, date: NaiveDate) -> DailyEntries {
        DailyEntries::new(date, self.entries_for_date(date))
    }

    /// Entries with `start <= date <= end`, by date then creation time.
    pub fn entries_for_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<TimeEntry> {
        if start > end {
            return Vec::new();
        }
        let mut out: Vec<TimeEntry> = self
            .entries
            .range(start..=end)
            .flat_map(|(_, v)| v.iter().cloned())
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        out
    }

    /// Summary of the seven days starting at `week_start`.
    pub fn weekly_summary(&self, week_start: NaiveDate) -> WeeklySummary {
        let week_end = week_start + Duration::days(6);
        let mut summary = WeeklySummary::new(week_start, week_end);

        for day in days_between(week_start, week_end) {
            let daily = self.daily_entries(day);
            if !daily.entries.is_empty() {
                summary.add_daily_entries(&daily);
            }
        }

        summary
    }

    pub fn count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// First and last date with at least one entry.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = *self.entries.keys().next()?;
        let last = *self.entries.keys().next_back()?;
        Some((first, last))
    }
}
