use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        from,
        to,
        code,
        details,
    } = cmd
    {
        HistoryLogic::print(
            cfg,
            range.as_deref(),
            from.as_deref(),
            to.as_deref(),
            code.as_deref(),
            *details,
        )?;
    }
    Ok(())
}
