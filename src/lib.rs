pub mod browse;
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod report;
pub mod session;
