use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        get,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Path::new(&cli.config);

        if *print_config {
            ConfigLogic::print(path, cfg)?;
        }

        if *check {
            let issues = ConfigLogic::check(path, cfg)?;
            let invalid = issues
                .iter()
                .filter(|i| matches!(i, crate::config::check::ConfigIssue::Invalid { .. }))
                .count();
            if invalid > 0 {
                return Err(AppError::Config(format!("{invalid} invalid value(s)")));
            }
        }

        if let Some(key) = get {
            ConfigLogic::get(cfg, key)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor.as_deref())?;
        }
    }

    Ok(())
}
