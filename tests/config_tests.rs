use std::fs;
use tsheet::config::Config;
use tsheet::config::check::{ConfigIssue, check};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load(&dir.path().join("config.toml")).unwrap();

    assert_eq!(cfg.app.name, "Timesheet Simplifier");
    assert_eq!(cfg.features.max_hours_per_day, 24.0);
    assert_eq!(cfg.features.default_hours, 8.0);
    assert!(cfg.features.enable_notes);
    assert_eq!(cfg.files.charge_code_patterns, ["*.xlsx", "*.xls", "*.csv"]);
    assert_eq!(cfg.ui.primary_color, "#1f77b4");
    assert_eq!(cfg.ui.secondary_color, "#ff7f0e");
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\norganization = \"ACME\"\n\n[features]\ndefault_hours = 7.5\n",
    )
    .unwrap();

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.app.organization, "ACME");
    assert_eq!(cfg.app.team, "Your Team");
    assert_eq!(cfg.features.default_hours, 7.5);
    assert_eq!(cfg.features.max_hours_per_day, 24.0);
}

#[test]
fn test_relative_paths_resolve_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[paths]\ndata_dir = \"store\"\n").unwrap();

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.data_dir(), dir.path().join("store"));
    assert_eq!(
        cfg.entries_file(),
        dir.path().join("store").join("time_entries.json")
    );
    assert_eq!(cfg.charge_codes_dir(), dir.path().join("./charge_codes"));

    cfg.ensure_directories().unwrap();
    assert!(dir.path().join("store").is_dir());
    assert!(dir.path().join("exports").is_dir());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[features\nmax = ").unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn test_dotted_key_lookup() {
    let cfg = Config::default();
    assert_eq!(
        cfg.get("app.organization").and_then(|v| v.as_str().map(String::from)),
        Some("Your Organization".to_string())
    );
    assert_eq!(
        cfg.get("features.max_hours_per_day").and_then(|v| v.as_float()),
        Some(24.0)
    );
    assert!(cfg.get("features.nope").is_none());
    assert!(cfg.get("nope").is_none());
}

#[test]
fn test_written_default_round_trips_and_checks_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    assert!(Config::write_default(&path).unwrap());
    assert!(!Config::write_default(&path).unwrap());

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.app.version, "1.0.0");
    assert!(check(&path, &cfg).unwrap().is_empty());
}

#[test]
fn test_check_reports_missing_and_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[features]\nmax_hours_per_day = 8.0\ndefault_hours = 9.0\n\n[ui]\nprimary_color = \"#12345\"\n",
    )
    .unwrap();

    let cfg = Config::load(&path).unwrap();
    let issues = check(&path, &cfg).unwrap();

    assert!(issues.contains(&ConfigIssue::Missing("app".into())));
    assert!(issues.contains(&ConfigIssue::Missing("features.enable_notes".into())));
    assert!(issues.contains(&ConfigIssue::Missing("ui.secondary_color".into())));
    assert!(issues.iter().any(
        |i| matches!(i, ConfigIssue::Invalid { key, .. } if key == "features.default_hours")
    ));
    assert!(issues.iter().any(
        |i| matches!(i, ConfigIssue::Invalid { key, .. } if key == "ui.primary_color")
    ));
}
