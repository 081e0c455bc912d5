mod archive;
mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod days_cmd;
mod logging;
mod render;
mod search_cmd;
mod session_cmd;
mod timeline_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::archive::Archive;
use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let archive = Archive::open(&cli.global)?;
    match cli.command {
        Command::Calendar(args) => calendar_cmd::run(&archive, args),
        Command::Timeline(args) => timeline_cmd::run(&archive, args),
        Command::Search(args) => search_cmd::run(&archive, args),
        Command::Session(args) => session_cmd::run(&archive, args),
        Command::Days => days_cmd::run(&archive),
    }
}
