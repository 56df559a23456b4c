use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An organization charge code and the friendly name users pick it by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeCode {
    pub friendly_name: String,
    pub percent: Option<f64>,
    pub task_source: Option<String>,
    pub task: Option<String>,
    pub sub_task: Option<String>,
    pub operating_unit: Option<String>,
    pub process: Option<String>,
    pub project: Option<String>,
    pub activity: Option<String>,
    pub customer_segment: Option<String>,
    /// Concatenated code as supplied by the organization, for copying.
    pub full_code: Option<String>,
    pub active: bool,
    pub loaded_at: DateTime<Local>,
}

impl ChargeCode {
    pub fn new(friendly_name: impl Into<String>) -> Self {
        Self {
            friendly_name: friendly_name.into(),
            percent: None,
            task_source: None,
            task: None,
            sub_task: None,
            operating_unit: None,
            process: None,
            project: None,
            activity: None,
            customer_segment: None,
            full_code: None,
            active: true,
            loaded_at: Local::now(),
        }
    }

    /// Labelled components in export order. Absent components are `None`.
    pub fn components(&self) -> [(&'static str, Option<String>); 9] {
        [
            ("Percent", self.percent.map(format_percent)),
            ("Task Source", self.task_source.clone()),
            ("Task", self.task.clone()),
            ("SubTask", self.sub_task.clone()),
            ("Operating Unit", self.operating_unit.clone()),
            ("Process", self.process.clone()),
            ("Project", self.project.clone()),
            ("Activity", self.activity.clone()),
            ("Customer Segment", self.customer_segment.clone()),
        ]
    }

    /// `Percent: 100 | Task: Development | Project: PROJ-001`
    pub fn full_code_string(&self) -> String {
        let parts: Vec<String> = self
            .components()
            .into_iter()
            .filter_map(|(label, v)| v.map(|v| format!("{label}: {v}")))
            .collect();

        if parts.is_empty() {
            "No charge code details".to_string()
        } else {
            parts.join(" | ")
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.friendly_name.eq_ignore_ascii_case(name.trim())
    }
}

fn format_percent(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{}", p as i64)
    } else {
        p.to_string()
    }
}
