use std::process;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;

use udiff::app;
use udiff::cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders help, version, and argument diagnostics itself;
            // only the exit code is ours: 0 for help/version, 1 otherwise.
            let exit_zero = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            if exit_zero {
                return Ok(());
            }
            process::exit(1);
        }
    };

    app::run(&cli)
}
