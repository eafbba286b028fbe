// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod output;
mod parser;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use innkeep::{Command, SystemState, apply};
use std::io::BufRead;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

use crate::output::{failure_message, print_outcome};
use crate::parser::{ParsedLine, parse_line};

/// Innkeep - interactive console for the hotel booking inventory
///
/// Reads single-line commands from stdin (one command per line) and
/// answers on stdout. `quit` or end of input ends the session.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries only command responses.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut state: SystemState = SystemState::new();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line: String = line?;
        match parse_line(&line) {
            Ok(ParsedLine::Quit) => break,
            Ok(ParsedLine::Command(command)) => run_command(&mut state, command),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Applies one command and prints its response.
///
/// Failures are answers, not faults: the error message is printed and the
/// session continues.
fn run_command(state: &mut SystemState, command: Command) {
    debug!(?command, "applying command");
    match apply(state, command) {
        Ok(outcome) => print_outcome(&outcome),
        Err(err) => {
            debug!(%err, "command rejected");
            println!("{}", failure_message(err.domain_error()));
        }
    }
}
