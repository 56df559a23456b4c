use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tsheet::codes::{ChargeCodeBook, read_charge_codes};
use tsheet::config::Config;
use tsheet::errors::AppError;

fn config_in(dir: &Path) -> Config {
    Config::load(&dir.join("config.toml")).unwrap()
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let codes = dir.join("charge_codes");
    fs::create_dir_all(&codes).unwrap();
    let path = codes.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn set_mtime(path: &Path, secs_ago: u64) {
    let t = SystemTime::now() - Duration::from_secs(secs_ago);
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(t)
        .unwrap();
}

#[test]
fn test_csv_aliases_and_optional_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "codes.csv",
        "\u{feff}Name,Percentage,Source,SubTask,Unit,Project_Code,Segment,Code\n\
         Alpha,75%,Internal,Backend,IT,PROJ-1,Retail,A-1-X\n\
         ,100,,,,,,\n\
         alpha,10,,,,,,\n\
         Beta,,,,,,,\n",
    );

    let codes = read_charge_codes(&path).unwrap();
    assert_eq!(codes.len(), 2);

    let alpha = &codes[0];
    assert_eq!(alpha.friendly_name, "Alpha");
    assert_eq!(alpha.percent, Some(75.0));
    assert_eq!(alpha.task_source.as_deref(), Some("Internal"));
    assert_eq!(alpha.sub_task.as_deref(), Some("Backend"));
    assert_eq!(alpha.operating_unit.as_deref(), Some("IT"));
    assert_eq!(alpha.project.as_deref(), Some("PROJ-1"));
    assert_eq!(alpha.customer_segment.as_deref(), Some("Retail"));
    assert_eq!(alpha.full_code.as_deref(), Some("A-1-X"));
    assert!(alpha.active);

    assert_eq!(codes[1].full_code_string(), "No charge code details");
}

#[test]
fn test_xlsx_codes_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let codes_dir = dir.path().join("charge_codes");
    fs::create_dir_all(&codes_dir).unwrap();
    let path = codes_dir.join("codes.xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    for (c, h) in ["friendly_name", "percent", "task", "project", "active"]
        .iter()
        .enumerate()
    {
        ws.write(0, c as u16, *h).unwrap();
    }
    ws.write(1, 0, "Alpha").unwrap();
    ws.write(1, 1, 100).unwrap();
    ws.write(1, 2, "Development").unwrap();
    ws.write(1, 3, "PROJ-001").unwrap();
    ws.write(1, 4, "yes").unwrap();
    ws.write(2, 0, "Old").unwrap();
    ws.write(2, 4, "no").unwrap();
    wb.save(&path).unwrap();

    let codes = read_charge_codes(&path).unwrap();
    assert_eq!(codes.len(), 2);
    assert_eq!(
        codes[0].full_code_string(),
        "Percent: 100 | Task: Development | Project: PROJ-001"
    );
    assert!(!codes[1].active);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "codes.txt", "friendly_name\nAlpha\n");
    assert!(matches!(
        read_charge_codes(&path),
        Err(AppError::UnsupportedCodeFile(_))
    ));
}

#[test]
fn test_newest_matching_file_wins() {
    let dir = tempfile::tempdir().unwrap();
    let old = write(dir.path(), "old.csv", "friendly_name\nOld Code\n");
    let new = write(dir.path(), "NEW.CSV", "friendly_name\nNew Code\n");
    write(dir.path(), "notes.txt", "friendly_name\nIgnored\n");
    set_mtime(&old, 120);
    set_mtime(&new, 10);

    let cfg = config_in(dir.path());
    let mut book = ChargeCodeBook::new(&cfg);
    assert_eq!(book.find_charge_code_file().unwrap(), Some(new.clone()));

    assert!(book.refresh_if_needed().unwrap());
    assert_eq!(book.source(), Some(new.as_path()));
    assert!(book.get("new code").is_some());

    // unchanged file: no reload
    assert!(!book.refresh_if_needed().unwrap());
}

#[test]
fn test_missing_file_error_mentions_manager() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());

    let err = match ChargeCodeBook::load_required(&cfg) {
        Err(e) => e,
        Ok(_) => panic!("expected an error"),
    };
    assert!(matches!(err, AppError::NoChargeCodeFile(_)));
    assert!(err.to_string().contains("ask your manager"));
}

#[test]
fn test_resolve_rules() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "codes.csv",
        "friendly_name,active\n\
         Project Alpha,yes\n\
         Project Beta,yes\n\
         Support Desk,yes\n\
         Retired Work,no\n",
    );
    let book = ChargeCodeBook::load_required(&config_in(dir.path())).unwrap();

    assert_eq!(book.resolve("project alpha").unwrap().friendly_name, "Project Alpha");
    assert_eq!(book.resolve("supp").unwrap().friendly_name, "Support Desk");
    assert_eq!(book.resolve("desk").unwrap().friendly_name, "Support Desk");

    match book.resolve("project") {
        Err(AppError::AmbiguousChargeCode { candidates, .. }) => {
            assert_eq!(candidates, ["Project Alpha", "Project Beta"])
        }
        other => panic!("unexpected {:?}", other.map(|c| c.friendly_name.clone())),
    }

    assert!(matches!(
        book.resolve("Retired Work"),
        Err(AppError::InactiveChargeCode(_))
    ));

    match book.resolve("Suport Desk") {
        Err(AppError::UnknownChargeCode { suggestion, .. }) => {
            assert_eq!(suggestion.as_deref(), Some("Support Desk"))
        }
        other => panic!("unexpected {:?}", other.map(|c| c.friendly_name.clone())),
    }

    assert!(matches!(
        book.resolve("zzz"),
        Err(AppError::UnknownChargeCode { suggestion: None, .. })
    ));
}
