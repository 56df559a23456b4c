use super::DailyEntries;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CodeTotal {
    pub hours: f64,
    pub entries: usize,
}

/// Hours for one Monday-to-Sunday week, per charge code and per day.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_hours: f64,
    pub by_charge_code: BTreeMap<String, CodeTotal>,
    pub daily_totals: BTreeMap<NaiveDate, f64>,
}

impl WeeklySummary {
    pub fn new(week_start: NaiveDate, week_end: NaiveDate) -> Self {
        Self {
            week_start,
            week_end,
            total_hours: 0.0,
            by_charge_code: BTreeMap::new(),
            daily_totals: BTreeMap::new(),
        }
    }

    pub fn add_daily_entries(&mut self, daily: &DailyEntries) {
        self.daily_totals.insert(daily.date, daily.total_hours);

        for entry in &daily.entries {
            let slot = self
                .by_charge_code
                .entry(entry.charge_code.clone())
                .or_default();
            slot.hours += entry.hours;
            slot.entries += 1;
        }

        self.recalculate_total();
    }

    pub fn recalculate_total(&mut self) {
        self.total_hours = self.daily_totals.values().sum();
    }
}
