use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { range, from, to } = cmd {
        SummaryLogic::print(cfg, range.as_deref(), from.as_deref(), to.as_deref())?;
    }
    Ok(())
}
