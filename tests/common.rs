#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CODES_CSV: &str = "\
Friendly Name,Percent,Task,Project,Operating Unit,Active
Project Alpha Development,100,Development,PROJ-001,IT,yes
Customer Support - Tier 2,100,Support,SUPP-002,Customer Service,yes
Training - Python Advanced,50,Training,TRAIN-003,HR,yes
Legacy Migration,100,Migration,OLD-009,IT,no
";

pub fn tsheet() -> Command {
    cargo_bin_cmd!("tsheet")
}

/// Isolated working directory with its own `config.toml`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Empty workspace: no config file, no charge codes.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Workspace initialized by `tsheet init` with the test charge codes.
    pub fn with_codes() -> Self {
        let ws = Self::empty();
        ws.cmd().arg("init").assert().success();
        ws.write_codes("codes.csv", CODES_CSV);
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("config.toml")
    }

    pub fn entries_path(&self) -> PathBuf {
        self.path().join("data").join("time_entries.json")
    }

    pub fn write_codes(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.path().join("charge_codes");
        fs::create_dir_all(&dir).expect("create charge_codes");
        let path = dir.join(name);
        fs::write(&path, content).expect("write codes");
        path
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("write config");
    }

    /// `tsheet --config <workspace>/config.toml`, run from the workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = tsheet();
        cmd.current_dir(self.path())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    pub fn add(&self, code: &str, hours: &str, date: &str) {
        self.cmd()
            .args(["add", code, hours, "--date", date])
            .assert()
            .success();
    }

    /// Ids of the stored entries, in file order.
    pub fn entry_ids(&self) -> Vec<String> {
        let content = fs::read_to_string(self.entries_path()).expect("read entries");
        let json: serde_json::Value = serde_json::from_str(&content).expect("parse entries");
        json.as_object()
            .expect("entries object")
            .values()
            .flat_map(|v| v.as_array().cloned().unwrap_or_default())
            .map(|e| e["id"].as_str().expect("id").to_string())
            .collect()
    }

    pub fn out(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }
}
