// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::{last_days, parse_date, today};
use chrono::{Datelike, Duration, NaiveDate};

/// Parse a range expression into inclusive bounds.
///
/// Accepted forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((a, b)) => {
            let (a, b) = (a.trim(), b.trim());
            if a.len() != b.len() {
                return Err(AppError::InvalidRange(format!(
                    "'{r}': start and end must have same format"
                )));
            }
            (period_bounds(a)?.0, period_bounds(b)?.1)
        }
        None => period_bounds(r.trim())?,
    };

    if start > end {
        return Err(AppError::InvalidRange(format!(
            "'{r}': start {start} is after end {end}"
        )));
    }
    Ok((start, end))
}

/// Period selected on the command line.
///
/// `--range` wins over `--from/--to`; `all` spans `bounds` (first and last
/// logged date). Without any option the last `default_days` days are used.
pub fn resolve_period(
    range: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    default_days: i64,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some(r) = range {
        if r.trim().eq_ignore_ascii_case("all") {
            let t = today();
            return Ok(bounds.unwrap_or((t, t)));
        }
        return parse_range(r);
    }

    let parse = |s: &str| parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()));

    let (start, end) = match (from, to) {
        (None, None) => return Ok(last_days(default_days)),
        (Some(f), None) => (parse(f)?, today()),
        (None, Some(t)) => {
            let end = parse(t)?;
            (end - Duration::days(default_days), end)
        }
        (Some(f), Some(t)) => (parse(f)?, parse(t)?),
    };

    if start > end {
        return Err(AppError::InvalidRange(format!(
            "start {start} is after end {end}"
        )));
    }
    Ok((start, end))
}

/// `2025-01-06` or `2025-01-06 to 2025-01-12`.
pub fn describe_period(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.format("%Y-%m-%d").to_string()
    } else {
        format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
    }
}

/// First and last day of a year, month or single day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("'{p}' is not YYYY, YYYY-MM or YYYY-MM-DD"));

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((d1, last_day_of_month(d1).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
