//! Dashboard: totals, hours per project, daily trend, the weekly breakdown
//! and a project by date heatmap of a period, plus today's and this week's
//! totals.

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{describe_period, resolve_period};
use crate::models::TimeEntry;
use crate::store::EntryStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, Theme, color_for_total};
use crate::utils::date::{today, week_dates, week_label};
use crate::utils::format_hours;
use crate::utils::formatting::{bold, hours_bar, percent_of};
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const DEFAULT_SUMMARY_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_hours: f64,
    /// Distinct dates with at least one entry.
    pub days: usize,
    /// Hours per project, largest first.
    pub projects: Vec<(String, f64)>,
    pub daily: BTreeMap<NaiveDate, f64>,
    /// `%Y-W%U` label → project → hours.
    pub weekly: BTreeMap<String, BTreeMap<String, f64>>,
    /// Project → date → hours summed over that day's entries.
    pub heatmap: BTreeMap<String, BTreeMap<NaiveDate, f64>>,
}

impl Dashboard {
    pub fn build(entries: &[TimeEntry], start: NaiveDate, end: NaiveDate) -> Self {
        let mut per_project: BTreeMap<String, f64> = BTreeMap::new();
        let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut weekly: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        let mut heatmap: BTreeMap<String, BTreeMap<NaiveDate, f64>> = BTreeMap::new();

        for e in entries.iter().filter(|e| e.date >= start && e.date <= end) {
            *per_project.entry(e.charge_code.clone()).or_default() += e.hours;
            *daily.entry(e.date).or_default() += e.hours;
            *weekly
                .entry(week_label(e.date))
                .or_default()
                .entry(e.charge_code.clone())
                .or_default() += e.hours;
            *heatmap
                .entry(e.charge_code.clone())
                .or_default()
                .entry(e.date)
                .or_default() += e.hours;
        }

        let mut projects: Vec<(String, f64)> = per_project.into_iter().collect();
        projects.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            start,
            end,
            total_hours: daily.values().sum(),
            days: daily.len(),
            projects,
            daily,
            weekly,
            heatmap,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.daily.is_empty()
    }

    pub fn average_per_day(&self) -> f64 {
        if self.days == 0 {
            0.0
        } else {
            self.total_hours / self.days as f64
        }
    }
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn print(
        cfg: &Config,
        range: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> AppResult<()> {
        let store = EntryStore::open(&cfg.entries_file())?;
        let (start, end) = resolve_period(range, from, to, DEFAULT_SUMMARY_DAYS, store.bounds())?;
        let dash = Dashboard::build(&store.entries_for_range(start, end), start, end);

        let theme = Theme::from_ui(&cfg.ui);
        header(
            &theme,
            format!(
                "📊 {} - {} ({})",
                cfg.app.organization,
                cfg.app.team,
                describe_period(start, end)
            ),
        );

        if dash.is_empty() {
            info("No entries found for the selected date range.");
        } else {
            print_dashboard(&theme, &dash, cfg.features.max_hours_per_day);
        }

        print_quick_stats(&theme, &store, cfg.features.max_hours_per_day);
        Ok(())
    }
}

fn print_dashboard(theme: &Theme, dash: &Dashboard, max: f64) {
    println!(
        "{} {}   {} {}   {} {}   {} {}",
        bold("Total Hours:"),
        format_hours(dash.total_hours),
        bold("Total Days:"),
        dash.days,
        bold("Avg Hours/Day:"),
        format_hours(dash.average_per_day()),
        bold("Projects:"),
        dash.projects.len()
    );

    println!("\n{}", theme.heading("Hours by Project"));
    let mut table = Table::with_headers(&["Project", "Hours", "Share"]);
    for (name, hours) in &dash.projects {
        table.add_row(vec![
            name.clone(),
            format_hours(*hours),
            percent_of(*hours, dash.total_hours),
        ]);
    }
    print!("{}", table.render());

    println!("\n{}", theme.heading("Daily Trend"));
    for (date, hours) in &dash.daily {
        println!(
            "{} {}{:>5}{} {}",
            date.format("%a %Y-%m-%d"),
            color_for_total(*hours, max),
            format_hours(*hours),
            RESET,
            theme.accent(&hours_bar(*hours, 1.0))
        );
    }

    println!("\n{}", theme.heading("Weekly Hours by Project"));
    let mut table = Table::with_headers(&["Week", "Project", "Hours"]);
    for (week, projects) in &dash.weekly {
        for (name, hours) in projects {
            table.add_row(vec![week.clone(), name.clone(), format_hours(*hours)]);
        }
    }
    print!("{}", table.render());

    println!("\n{}", theme.heading("Hours Heatmap by Project and Date"));
    print!("{}", heatmap_table(theme, dash).render());
}

/// One row per project, one column per date with entries; empty cells are dots.
fn heatmap_table(theme: &Theme, dash: &Dashboard) -> Table {
    let dates: Vec<NaiveDate> = dash.daily.keys().copied().collect();
    let labels: Vec<String> = dates.iter().map(|d| d.format("%m-%d").to_string()).collect();

    let mut headers = vec!["Project"];
    headers.extend(labels.iter().map(String::as_str));
    let mut table = Table::with_headers(&headers);

    for (name, days) in &dash.heatmap {
        let mut row = vec![name.clone()];
        for date in &dates {
            row.push(match days.get(date) {
                Some(hours) => theme.accent(&format_hours(*hours)),
                None => format!("{GREY}·{RESET}"),
            });
        }
        table.add_row(row);
    }
    table
}

fn print_quick_stats(theme: &Theme, store: &EntryStore, max: f64) {
    let today_total = store.daily_entries(today()).total_hours;
    let (week_start, _) = week_dates(today());
    let week = store.weekly_summary(week_start);

    println!("\n{}", theme.heading("📈 Quick Stats"));
    println!(
        "Today's Hours:     {}{}{}",
        color_for_total(today_total, max),
        format_hours(today_total),
        RESET
    );
    println!("This Week's Hours: {}", format_hours(week.total_hours));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(date: &str, code: &str, hours: f64) -> TimeEntry {
        TimeEntry::new(d(date), code, hours, None).unwrap()
    }

    #[test]
    fn dashboard_totals_and_average() {
        let entries = vec![
            entry("2025-01-06", "Alpha", 6.0),
            entry("2025-01-06", "Beta", 2.0),
            entry("2025-01-07", "Alpha", 4.0),
        ];
        let dash = Dashboard::build(&entries, d("2025-01-01"), d("2025-01-31"));

        assert_eq!(dash.total_hours, 12.0);
        assert_eq!(dash.days, 2);
        assert_eq!(dash.average_per_day(), 6.0);
        assert_eq!(dash.projects[0], ("Alpha".to_string(), 10.0));
        assert_eq!(dash.projects.len(), 2);
    }

    #[test]
    fn heatmap_sums_hours_per_project_and_date() {
        let entries = vec![
            entry("2025-01-06", "Alpha", 2.0),
            entry("2025-01-06", "Alpha", 1.5),
            entry("2025-01-07", "Beta", 4.0),
        ];
        let dash = Dashboard::build(&entries, d("2025-01-01"), d("2025-01-31"));

        assert_eq!(dash.heatmap["Alpha"][&d("2025-01-06")], 3.5);
        assert!(!dash.heatmap["Alpha"].contains_key(&d("2025-01-07")));
        assert_eq!(dash.heatmap["Beta"][&d("2025-01-07")], 4.0);

        let table = heatmap_table(&Theme::default(), &dash);
        let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, ["Project", "01-06", "01-07"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "Alpha");
        assert!(table.rows[0][2].contains('·'));
    }

    #[test]
    fn weekly_breakdown_uses_sunday_based_labels() {
        // 2025-01-05 is a Sunday: it opens week 01, the Saturday before closes week 00.
        let entries = vec![
            entry("2025-01-04", "Alpha", 1.0),
            entry("2025-01-05", "Alpha", 2.0),
            entry("2025-01-06", "Alpha", 3.0),
        ];
        let dash = Dashboard::build(&entries, d("2025-01-01"), d("2025-01-31"));

        assert_eq!(dash.weekly["2025-W00"]["Alpha"], 1.0);
        assert_eq!(dash.weekly["2025-W01"]["Alpha"], 5.0);
    }

    #[test]
    fn entries_outside_the_period_are_ignored() {
        let entries = vec![entry("2024-12-31", "Alpha", 8.0)];
        let dash = Dashboard::build(&entries, d("2025-01-01"), d("2025-01-31"));
        assert!(dash.is_empty());
        assert_eq!(dash.average_per_day(), 0.0);
    }
}
