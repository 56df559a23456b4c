use super::TimeEntry;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// All entries logged on one date.
#[derive(Debug, Clone, Serialize)]
pub struct DailyEntries {
    pub date: NaiveDate,
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
}

impl DailyEntries {
    pub fn new(date: NaiveDate, entries: Vec<TimeEntry>) -> Self {
        let mut daily = Self {
            date,
            entries,
            total_hours: 0.0,
        };
        daily.recalculate_total();
        daily
    }

    pub fn add_entry(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
        self.recalculate_total();
    }

    pub fn remove_entry(&mut self, id: &Uuid) {
        self.entries.retain(|e| &e.id != id);
        self.recalculate_total();
    }

    pub fn recalculate_total(&mut self) {
        self.total_hours = self.entries.iter().map(|e| e.hours).sum();
    }

    pub fn validate_total_hours(&self, max_hours: f64) -> bool {
        self.total_hours <= max_hours
    }
}
