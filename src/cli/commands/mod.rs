pub mod add;
pub mod clear;
pub mod codes;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;
pub mod today;
