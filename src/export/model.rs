// src/export/model.rs

use crate::codes::ChargeCodeBook;
use crate::models::TimeEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Simple CSV row: what was logged, by friendly name.
#[derive(Serialize, Clone, Debug)]
pub struct SimpleRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Charge Code")]
    pub charge_code: String,
    #[serde(rename = "Hours")]
    pub hours: f64,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

/// Detailed row: the entry joined with its charge code components.
/// Components are empty when the code is no longer in the loaded list.
#[derive(Serialize, Clone, Debug)]
pub struct DetailedRow {
    pub date: NaiveDate,
    pub friendly_name: String,
    pub hours: f64,
    pub notes: String,
    pub percent: Option<f64>,
    pub task_source: Option<String>,
    pub task: Option<String>,
    pub sub_task: Option<String>,
    pub operating_unit: Option<String>,
    pub process: Option<String>,
    pub project: Option<String>,
    pub activity: Option<String>,
    pub customer_segment: Option<String>,
}

impl SimpleRow {
    pub fn from_entry(e: &TimeEntry) -> Self {
        Self {
            date: e.date,
            charge_code: e.charge_code.clone(),
            hours: e.hours,
            notes: e.notes.clone().unwrap_or_default(),
            created_at: e.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl DetailedRow {
    pub fn from_entry(e: &TimeEntry, book: &ChargeCodeBook) -> Self {
        let code = book.get(&e.charge_code);
        let pick = |f: fn(&crate::models::ChargeCode) -> Option<String>| code.and_then(f);

        Self {
            date: e.date,
            friendly_name: e.charge_code.clone(),
            hours: e.hours,
            notes: e.notes.clone().unwrap_or_default(),
            percent: code.and_then(|c| c.percent),
            task_source: pick(|c| c.task_source.clone()),
            task: pick(|c| c.task.clone()),
            sub_task: pick(|c| c.sub_task.clone()),
            operating_unit: pick(|c| c.operating_unit.clone()),
            process: pick(|c| c.process.clone()),
            project: pick(|c| c.project.clone()),
            activity: pick(|c| c.activity.clone()),
            customer_segment: pick(|c| c.customer_segment.clone()),
        }
    }
}

/// Header for the detailed XLSX sheet.
pub(crate) fn detailed_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Friendly Name",
        "Hours",
        "Notes",
        "Percent",
        "Task Source",
        "Task",
        "SubTask",
        "Operating Unit",
        "Process",
        "Project",
        "Activity",
        "Customer Segment",
    ]
}

/// String components in sheet order, from "Task Source" to "Customer Segment".
pub(crate) fn component_cells(r: &DetailedRow) -> [&Option<String>; 8] {
    [
        &r.task_source,
        &r.task,
        &r.sub_task,
        &r.operating_unit,
        &r.process,
        &r.project,
        &r.activity,
        &r.customer_segment,
    ]
}
