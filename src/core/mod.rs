//! Business operations behind each subcommand.

pub mod add;
pub mod codes;
pub mod config;
pub mod del;
pub mod history;
pub mod init;
pub mod log;
pub mod summary;
pub mod today;
