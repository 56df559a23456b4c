use calamine::{Data, Reader, open_workbook_auto};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::Workspace;

fn workspace_with_entries() -> Workspace {
    let ws = Workspace::with_codes();
    ws.cmd()
        .args([
            "add",
            "Project Alpha Development",
            "4",
            "--date",
            "2025-01-06",
            "--notes",
            "API design",
        ])
        .assert()
        .success();
    ws.add("Customer Support - Tier 2", "3.5", "2025-01-07");
    ws.add("Project Alpha Development", "8", "2025-01-14");
    ws
}

#[test]
fn test_export_csv_round_trip() {
    let ws = workspace_with_entries();
    let out = ws.out("entries.csv");

    ws.cmd()
        .args(["export", "--format", "csv", "--range", "2025-01", "--file"])
        .arg(&out)
        .assert()
        .success();

    let mut rdr = csv::Reader::from_path(&out).expect("open csv");
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["Date", "Charge Code", "Hours", "Notes", "Created At"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "2025-01-06");
    assert_eq!(&rows[0][1], "Project Alpha Development");
    assert_eq!(rows[0][2].parse::<f64>().unwrap(), 4.0);
    assert_eq!(&rows[0][3], "API design");
    assert_eq!(rows[1][2].parse::<f64>().unwrap(), 3.5);
}

#[test]
fn test_export_json_has_charge_code_details() {
    let ws = workspace_with_entries();
    let out = ws.out("entries.json");

    ws.cmd()
        .args(["export", "--format", "json", "--range", "2025-01-06:2025-01-07", "--file"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).expect("valid json");
    let rows = json.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2025-01-06");
    assert_eq!(rows[0]["friendly_name"], "Project Alpha Development");
    assert_eq!(rows[0]["hours"], 4.0);
    assert_eq!(rows[0]["notes"], "API design");
    assert_eq!(rows[0]["project"], "PROJ-001");
    assert_eq!(rows[0]["percent"], 100.0);
    assert_eq!(rows[1]["operating_unit"], "Customer Service");
}

#[test]
fn test_export_xlsx_detailed_sheet() {
    let ws = workspace_with_entries();
    let out = ws.out("entries.xlsx");

    ws.cmd()
        .args(["export", "--format", "xlsx", "--range", "2025-01", "--file"])
        .arg(&out)
        .assert()
        .success();

    let mut workbook = open_workbook_auto(&out).expect("open xlsx");
    let range = workbook.worksheet_range("Time Entries").expect("sheet");

    assert_eq!(range.get((0, 1)), Some(&Data::String("Friendly Name".into())));
    assert_eq!(range.get((0, 12)), Some(&Data::String("Customer Segment".into())));
    assert_eq!(
        range.get((1, 1)),
        Some(&Data::String("Project Alpha Development".into()))
    );
    assert_eq!(range.get((1, 2)), Some(&Data::Float(4.0)));
    assert_eq!(range.get((1, 3)), Some(&Data::String("API design".into())));
    assert_eq!(range.get((1, 10)), Some(&Data::String("PROJ-001".into())));
    assert_eq!(range.height(), 4);
}

#[test]
fn test_export_pdf_weekly_report() {
    let ws = workspace_with_entries();
    let out = ws.out("report.pdf");

    ws.cmd()
        .args(["export", "--format", "pdf", "--range", "2025-01", "--file"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Weekly Summary Report"));
    assert!(text.contains("Week of 2025-01-06 to 2025-01-12"));
    assert!(text.contains("Week of 2025-01-13 to 2025-01-19"));
}

#[test]
fn test_deleted_entry_is_not_exported() {
    let ws = workspace_with_entries();
    let ids = ws.entry_ids();
    let deleted = &ids[0];

    ws.cmd().args(["del", &deleted[..8], "--yes"]).assert().success();

    let out = ws.out("after_delete.csv");
    ws.cmd()
        .args(["export", "--format", "csv", "--range", "2025-01", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains("API design"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_export_empty_range_fails_without_file() {
    let ws = workspace_with_entries();
    let out = ws.out("empty.csv");

    ws.cmd()
        .args(["export", "--format", "csv", "--range", "2024", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("No entries to export"));

    assert!(!out.exists());
}

#[test]
fn test_export_default_file_in_export_dir() {
    let ws = workspace_with_entries();

    ws.cmd()
        .args(["export", "--format", "xlsx", "--range", "all"])
        .assert()
        .success();

    let names: Vec<String> = fs::read_dir(ws.path().join("exports"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(
        names
            .iter()
            .any(|n| n.starts_with("time_entries_") && n.ends_with(".xlsx")),
        "{names:?}"
    );
}

#[test]
fn test_export_preview_writes_nothing() {
    let ws = workspace_with_entries();

    ws.cmd()
        .args(["export", "--range", "2025-01", "--preview"])
        .assert()
        .success()
        .stdout(contains("Export preview").and(contains("Project: PROJ-001")));

    let files = fs::read_dir(ws.path().join("exports"))
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name() != ".gitkeep")
        .count();
    assert_eq!(files, 0);
}

#[test]
fn test_existing_file_requires_force() {
    let ws = workspace_with_entries();
    let out = ws.out("existing.csv");
    fs::write(&out, "keep me").unwrap();

    ws.cmd()
        .args(["export", "--range", "2025-01", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("Operation cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    ws.cmd()
        .args(["export", "--range", "2025-01", "--force", "--file"])
        .arg(&out)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,Charge Code"));
}

#[test]
fn test_invalid_range_is_rejected() {
    let ws = workspace_with_entries();

    ws.cmd()
        .args(["export", "--range", "2025:2025-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}
