use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "newslog",
    version,
    about = "Analytical reports over the news article access log"
)]
pub struct Cli {
    /// Path to the news database file. Relative paths resolve against the
    /// working directory; defaults to `news.db`.
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,
}
