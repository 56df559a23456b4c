use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        from,
        to,
        force,
        preview,
    } = cmd
    {
        let opts = ExportOptions {
            format: *format,
            file: file.clone(),
            range: range.clone(),
            from: from.clone(),
            to: to.clone(),
            force: *force,
            preview: *preview,
        };
        ExportLogic::export(cfg, &opts)?;
    }
    Ok(())
}
