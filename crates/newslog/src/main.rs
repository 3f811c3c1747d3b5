#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use newslog::Cli;
use newslog::cli::commands;
use newslog::config::resolve_database_path;
use newslog::sqlite::ConnectionFailure;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME_FAILURE: i32 = 1;
const EXIT_USAGE_ERROR: i32 = 64;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return exit_code_for_parse_error(error),
    };

    match execute(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            if let Some(failure) = error.downcast_ref::<ConnectionFailure>() {
                eprintln!("newslog: {failure}");
            } else {
                eprintln!("newslog: report failed");
                eprintln!("{error:#}");
            }
            EXIT_RUNTIME_FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_database_path(&cwd, cli.database.as_deref())?;
    commands::report::run(&config.path)
}

fn exit_code_for_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            EXIT_SUCCESS
        }
        _ => {
            let _ = error.print();
            EXIT_USAGE_ERROR
        }
    }
}
