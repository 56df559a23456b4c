use crate::cli::parser::{Cli, Commands};
use crate::core::init::InitLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// This creates, when missing:
///  - the configuration file
///  - the charge_codes, data and exports directories (with `.gitkeep`)
///  - a sample charge code file with `--sample`
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { sample } = &cli.command {
        let path = Path::new(&cli.config);
        let report = InitLogic::apply(path, *sample)?;
        InitLogic::print(path, &report);
    }
    Ok(())
}
