use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codes::CodesLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Codes { refresh, show } = cmd {
        match show {
            Some(name) => CodesLogic::show(cfg, name)?,
            None => CodesLogic::list(cfg, *refresh)?,
        }
    }
    Ok(())
}
