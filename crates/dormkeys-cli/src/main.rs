//! `dormkeys` front-desk binary.
//!
//! Loads the dormitory from the data file, runs one subcommand (or an
//! interactive shell), and lets the front desk save after every change.
//!
//! ```bash
//! dormkeys add-room 101
//! dormkeys check-in 101 alice
//! dormkeys lose-key 101 alice room_key
//! dormkeys inventory
//! dormkeys --data /srv/dorm.json shell
//! ```

mod cli;
mod commands;
mod shell;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dormkeys::{DormkeysError, FileStore, FrontDesk, logging};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code(&e)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = FileStore::new(&cli.data);
    let mut desk = FrontDesk::open(store)
        .with_context(|| format!("could not open {}", cli.data.display()))?;
    tracing::debug!(data = %cli.data.display(), "front desk ready");

    match cli.command {
        Command::Op(op) => {
            let message = commands::execute(&mut desk, op)?;
            println!("{message}");
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(&mut desk, stdin.lock(), &mut io::stdout())?;
        }
    }
    Ok(())
}

/// 1 for operations the operator can correct, 2 for storage or data
/// problems.
fn exit_code(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<DormkeysError>() {
        Some(err) if err.is_rejection() => ExitCode::from(1),
        _ => ExitCode::from(2),
    }
}
