use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::today::TodayLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date } = cmd {
        TodayLogic::print(cfg, date.as_deref())?;
    }
    Ok(())
}
