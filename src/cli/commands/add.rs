use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;

/// Log hours against a charge code.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        code,
        hours,
        date,
        notes,
    } = cmd
    {
        AddLogic::apply(cfg, code, *hours, date.as_deref(), notes.clone())?;
    }
    Ok(())
}
