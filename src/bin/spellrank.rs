//! spellrank CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use spellrank::cli::args::SpellRankArgs;
use spellrank::cli::commands::{error_hint, execute_command};

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    // Wrong argument counts exit here with clap's usage message and status 2
    let args = SpellRankArgs::parse();

    Builder::new()
        .filter_level(log_level(args.verbosity()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args.clone()) {
        eprintln!("Error: {e}");
        if let Some(hint) = error_hint(&e, &args) {
            eprintln!("{hint}");
        }
        process::exit(1);
    }
}
