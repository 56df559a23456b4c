use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse `YYYY-MM-DD`, `today` or `yesterday`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" => Some(today()),
        "yesterday" => today().pred_opt(),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").ok(),
    }
}

/// Monday and Sunday of the week containing `date`.
pub fn week_dates(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let since_monday = date.weekday().num_days_from_monday() as i64;
    let start = date - Duration::days(since_monday);
    (start, start + Duration::days(6))
}

/// `(today - days, today)`
pub fn last_days(days: i64) -> (NaiveDate, NaiveDate) {
    let end = today();
    (end - Duration::days(days), end)
}

/// Every date from `start` to `end`, both included.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Week label used for the weekly breakdown, Sunday-based week number as `%Y-W%U`.
pub fn week_label(date: NaiveDate) -> String {
    date.format("%Y-W%U").to_string()
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %d, %Y").to_string()
}
