use chrono::NaiveDate;
use std::fs;
use tsheet::errors::AppError;
use tsheet::models::{DailyEntries, TimeEntry};
use tsheet::store::EntryStore;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn entry(date: &str, code: &str, hours: f64) -> TimeEntry {
    TimeEntry::new(d(date), code, hours, None).expect("valid entry")
}

#[test]
fn test_hours_outside_zero_to_24_are_rejected() {
    for h in [0.25, 1.0, 7.5, 23.99, 24.0] {
        assert!(TimeEntry::new(d("2025-01-06"), "Alpha", h, None).is_ok(), "{h}");
    }
    for h in [0.0, -0.5, 24.01, 100.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(
                TimeEntry::new(d("2025-01-06"), "Alpha", h, None),
                Err(AppError::InvalidHours(_))
            ),
            "{h}"
        );
    }
}

#[test]
fn test_blank_notes_are_dropped() {
    let e = TimeEntry::new(d("2025-01-06"), "Alpha", 1.0, Some("   ".into())).unwrap();
    assert_eq!(e.notes, None);
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = EntryStore::open(&dir.path().join("none.json")).unwrap();
    assert_eq!(store.count(), 0);
    assert_eq!(store.bounds(), None);
}

#[test]
fn test_entries_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("entries.json");

    let mut store = EntryStore::open(&path).unwrap();
    let first = entry("2025-01-06", "Alpha", 4.0);
    store.add_entry(first.clone(), 24.0).unwrap();
    store.add_entry(entry("2025-01-08", "Beta", 2.0), 24.0).unwrap();

    let reopened = EntryStore::open(&path).unwrap();
    assert_eq!(reopened.count(), 2);
    assert_eq!(reopened.find(&first.id), Some(&first));
    assert_eq!(reopened.bounds(), Some((d("2025-01-06"), d("2025-01-08"))));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json.get("2025-01-06").is_some_and(|v| v.is_array()));
}

#[test]
fn test_daily_limit_counts_existing_entries() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntryStore::open(&dir.path().join("e.json")).unwrap();

    store.add_entry(entry("2025-01-06", "Alpha", 6.0), 8.0).unwrap();
    store.add_entry(entry("2025-01-06", "Beta", 2.0), 8.0).unwrap();

    let err = store
        .add_entry(entry("2025-01-06", "Beta", 0.5), 8.0)
        .unwrap_err();
    assert!(matches!(err, AppError::DailyLimitExceeded { total, .. } if total == "8.5"));

    // other days are unaffected
    store.add_entry(entry("2025-01-07", "Beta", 8.0), 8.0).unwrap();
    assert_eq!(store.count(), 3);
}

#[test]
fn test_decimal_hours_summing_to_the_limit_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntryStore::open(&dir.path().join("e.json")).unwrap();

    for h in [0.1, 16.1, 7.8] {
        store
            .add_entry(entry("2025-01-06", "Alpha", h), 24.0)
            .unwrap_or_else(|e| panic!("add {h}: {e}"));
    }
    assert_eq!(store.count(), 3);

    let err = store
        .add_entry(entry("2025-01-06", "Alpha", 0.1), 24.0)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot add entry: 2025-01-06 would total 24.1 hours, above the daily limit of 24 hours"
    );
}

#[test]
fn test_delete_by_prefix_and_date() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntryStore::open(&dir.path().join("e.json")).unwrap();

    let a = entry("2025-01-06", "Alpha", 1.0);
    store.add_entry(a.clone(), 24.0).unwrap();
    store.add_entry(entry("2025-01-07", "Beta", 1.0), 24.0).unwrap();
    store.add_entry(entry("2025-01-07", "Gamma", 1.0), 24.0).unwrap();

    let prefix = a.id.simple().to_string()[..8].to_string();
    assert_eq!(store.delete_by_prefix(&prefix).unwrap().id, a.id);
    assert!(matches!(
        store.delete_entry(&a.id),
        Err(AppError::EntryNotFound(_))
    ));

    assert_eq!(store.delete_date(d("2025-01-07")).unwrap(), 2);
    assert_eq!(store.count(), 0);
    assert_eq!(store.bounds(), None);
}

#[test]
fn test_range_is_inclusive_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntryStore::open(&dir.path().join("e.json")).unwrap();

    for (date, code) in [
        ("2025-01-09", "C"),
        ("2025-01-05", "Out"),
        ("2025-01-06", "A"),
        ("2025-01-06", "B"),
        ("2025-01-13", "Out"),
    ] {
        store.add_entry(entry(date, code, 1.0), 24.0).unwrap();
    }

    let codes: Vec<String> = store
        .entries_for_range(d("2025-01-06"), d("2025-01-12"))
        .into_iter()
        .map(|e| e.charge_code)
        .collect();
    assert_eq!(codes, ["A", "B", "C"]);
    assert!(store.entries_for_range(d("2025-01-12"), d("2025-01-06")).is_empty());
}

#[test]
fn test_weekly_summary_groups_by_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntryStore::open(&dir.path().join("e.json")).unwrap();

    store.add_entry(entry("2025-01-06", "Alpha", 4.0), 24.0).unwrap();
    store.add_entry(entry("2025-01-07", "Alpha", 3.0), 24.0).unwrap();
    store.add_entry(entry("2025-01-12", "Beta", 1.5), 24.0).unwrap();
    store.add_entry(entry("2025-01-13", "Beta", 8.0), 24.0).unwrap();

    let week = store.weekly_summary(d("2025-01-06"));
    assert_eq!(week.week_end, d("2025-01-12"));
    assert_eq!(week.total_hours, 8.5);
    assert_eq!(week.by_charge_code["Alpha"].hours, 7.0);
    assert_eq!(week.by_charge_code["Alpha"].entries, 2);
    assert_eq!(week.daily_totals.len(), 3);
}

#[test]
fn test_malformed_file_is_an_error_and_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("e.json");
    fs::write(&path, "[1, 2").unwrap();

    assert!(matches!(EntryStore::open(&path), Err(AppError::Json(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2");
}

#[test]
fn test_daily_entries_totals() {
    let a = entry("2025-01-06", "Alpha", 4.0);
    let mut day = DailyEntries::new(d("2025-01-06"), vec![a.clone()]);
    day.add_entry(entry("2025-01-06", "Beta", 5.0));
    assert_eq!(day.total_hours, 9.0);
    assert!(!day.validate_total_hours(8.0));

    day.remove_entry(&a.id);
    assert_eq!(day.total_hours, 5.0);
    assert!(day.validate_total_hours(8.0));
}
