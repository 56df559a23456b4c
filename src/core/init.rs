use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::record;
use crate::ui::messages::{info, success};
use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_CODES_FILE: &str = "sample_charge_codes.csv";

/// Sample charge code file, one row per friendly name.
pub const SAMPLE_CODES_CSV: &str = "\
friendly_name,percent,task_source,task,sub_task,operating_unit,process,project,activity,customer_segment
Project Alpha Development,100,Internal,Development,Backend,IT,Engineering,PROJ-001,Build,Enterprise
Customer Support - Tier 2,100,Customer,Support,Escalations,Customer Service,Operations,SUPP-002,Support,Retail
Training - Python Advanced,100,Internal,Training,,HR,Learning,TRAIN-003,Training,
";

/// What `init` created; existing files and directories are left alone.
#[derive(Debug, Default)]
pub struct InitReport {
    pub config_created: bool,
    pub directories: Vec<PathBuf>,
    pub sample: Option<PathBuf>,
}

pub struct InitLogic;

impl InitLogic {
    pub fn apply(config_path: &Path, sample: bool) -> AppResult<InitReport> {
        let mut report = InitReport {
            config_created: Config::write_default(config_path)?,
            ..Default::default()
        };

        let cfg = Config::load(config_path)?;
        cfg.ensure_directories()?;

        for dir in [cfg.charge_codes_dir(), cfg.data_dir(), cfg.export_dir()] {
            let keep = dir.join(".gitkeep");
            if !keep.exists() {
                fs::write(&keep, "")?;
            }
            report.directories.push(dir);
        }

        if sample {
            let path = cfg.charge_codes_dir().join(SAMPLE_CODES_FILE);
            if !path.exists() {
                fs::write(&path, SAMPLE_CODES_CSV)?;
            }
            report.sample = Some(path);
        }

        record(
            &cfg.activity_log_file(),
            "init",
            &config_path.display().to_string(),
            if report.config_created {
                "configuration created"
            } else {
                "directories checked"
            },
        );

        Ok(report)
    }

    pub fn print(config_path: &Path, report: &InitReport) {
        println!("⚙️  Initializing tsheet…");
        if report.config_created {
            success(format!("Config file created: {}", config_path.display()));
        } else {
            info(format!("Config file already exists: {}", config_path.display()));
        }
        for dir in &report.directories {
            println!("📁 {}", dir.display());
        }
        if let Some(sample) = &report.sample {
            println!("📋 Sample charge codes: {}", sample.display());
        }

        println!();
        println!("Next steps:");
        println!("  1. Put the charge code file from your manager (.xlsx, .xls or .csv) in the charge codes directory");
        println!("  2. tsheet codes");
        println!("  3. tsheet add \"<friendly name>\" 8");
    }
}
