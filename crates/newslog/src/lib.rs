#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod models;
pub mod reports;
pub mod sqlite;
pub mod utils;

pub use cli::app::Cli;
