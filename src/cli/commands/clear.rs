use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::ClearLogic;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes
            && !confirm("Delete ALL time entries? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = ClearLogic::apply(cfg)?;
        success(format!("All time entries have been cleared ({removed} removed)."));
    }
    Ok(())
}
