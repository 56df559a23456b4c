use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;
use crate::utils::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, date, yes } = cmd {
        if let Some(date_str) = date {
            let d = date::parse_date(date_str)
                .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;

            if !*yes
                && !confirm(&format!(
                    "Delete ALL entries for {d}? This action is irreversible."
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = DeleteLogic::delete_date(cfg, d)?;
            if removed == 0 {
                info(format!("No entries for {d}."));
            } else {
                success(format!("{removed} entries for {d} have been deleted."));
            }
            return Ok(());
        }

        if let Some(prefix) = id {
            let entry = DeleteLogic::lookup(cfg, prefix)?;

            if !*yes
                && !confirm(&format!(
                    "Delete {} h for '{}' on {}? This action is irreversible.",
                    format_hours(entry.hours),
                    entry.charge_code,
                    entry.date
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = DeleteLogic::delete_entry(cfg, prefix)?;
            success(format!(
                "Entry for '{}' on {} has been deleted.",
                removed.charge_code, removed.date
            ));
        }
    }

    Ok(())
}
