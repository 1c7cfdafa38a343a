pub mod config;
pub mod export;
pub mod init;
pub mod report;
pub mod shifts;

mod common;
