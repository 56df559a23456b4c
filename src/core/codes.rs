use crate::codes::ChargeCodeBook;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::core::init::SAMPLE_CODES_CSV;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{GREEN, RED, RESET, Theme, colorize_optional};
use crate::utils::table::Table;

const WRAP_WIDTH: usize = 80;

pub struct CodesLogic;

impl CodesLogic {
    /// List the codes of the newest charge code file.
    pub fn list(cfg: &Config, refresh: bool) -> AppResult<()> {
        let mut book = ChargeCodeBook::new(cfg);

        if book.find_charge_code_file()?.is_none() {
            print_guidance(&book);
            return Ok(());
        }

        let reloaded = book.refresh_if_needed()?;
        if refresh {
            if reloaded {
                success("Charge codes refreshed!");
            } else {
                info("Charge codes are already up to date");
            }
        }

        let theme = Theme::from_ui(&cfg.ui);
        header(&theme, "📋 Current Charge Codes");

        if let Some(source) = book.source() {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| source.display().to_string());
            println!("Loaded from: {name}\n");
        }

        if book.codes().is_empty() {
            warning("No valid charge codes found in the file. Please check the file format.");
            return Ok(());
        }

        let mut table = Table::with_headers(&["Friendly Name", "Project", "Task", "Operating Unit", "Active"]);
        for cc in book.codes() {
            let dash = || "-".to_string();
            table.add_row(vec![
                cc.friendly_name.clone(),
                colorize_optional(&cc.project.clone().unwrap_or_else(dash)),
                colorize_optional(&cc.task.clone().unwrap_or_else(dash)),
                colorize_optional(&cc.operating_unit.clone().unwrap_or_else(dash)),
                if cc.active {
                    format!("{GREEN}yes{RESET}")
                } else {
                    format!("{RED}no{RESET}")
                },
            ]);
        }
        print!("{}", table.render());

        let active = book.active_codes().count();
        info(format!("{} codes, {} active", book.codes().len(), active));
        Ok(())
    }

    /// Print the full charge code behind a friendly name.
    pub fn show(cfg: &Config, name: &str) -> AppResult<()> {
        let book = ChargeCodeBook::load_required(cfg)?;

        let code = match book.get(name) {
            Some(c) => c,
            None => book.resolve(name)?,
        };

        let theme = Theme::from_ui(&cfg.ui);
        header(&theme, &code.friendly_name);
        println!("{}", textwrap::fill(&code.full_code_string(), WRAP_WIDTH));
        if let Some(full) = &code.full_code {
            println!("Full code: {full}");
        }
        if !code.active {
            warning(AppError::InactiveChargeCode(code.friendly_name.clone()));
        }
        Ok(())
    }
}

fn print_guidance(book: &ChargeCodeBook) {
    warning("No charge code file found!");
    let ask = format!(
        "Please ask your manager to place a charge code file in '{}'.",
        book.dir().display()
    );
    println!("\n{}", textwrap::fill(&ask, WRAP_WIDTH));
    println!("The file should be in Excel (.xlsx, .xls) or CSV format with columns for:");
    println!("  - Friendly Name (required)");
    println!(
        "  - Percent, Task Source, Task, SubTask, Operating Unit, Process, Project, Activity, Customer Segment (optional)"
    );
    println!("\nSample charge code file format:\n");
    print!("{SAMPLE_CODES_CSV}");
    println!("\nRun `tsheet init --sample` to write this sample into the directory.");
}
