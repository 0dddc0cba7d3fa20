//! # Riverline CLI
//!
//! Command-line front end for the riverline poker engine. The entry
//! point is [`run`], which parses arguments and dispatches to a
//! subcommand handler.
//!
//! ## Subcommands
//!
//! - `play`: single-table game to a champion, interactive (seat 0 on
//!   stdin) or `--auto` bot-only
//! - `sim`: bot-only games in bulk, with optional JSONL round history
//! - `deal`: deal one hand face up for inspection
//!
//! ## Example
//!
//! ```
//! use std::io;
//! let args = vec!["riverline", "deal", "--seed", "42"];
//! let code = riverline_cli::run(args, &mut io::sink(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_code;
pub mod human;

use cli::{Commands, RiverlineCli};
pub use error::CliError;

/// Parses `args` and runs the chosen subcommand, writing to the given
/// streams. Returns the process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let parsed = match RiverlineCli::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            // --help and --version land here too; they are not errors.
            return if e.use_stderr() {
                let _ = write!(err, "{}", e);
                exit_code::ERROR
            } else {
                let _ = write!(out, "{}", e);
                exit_code::SUCCESS
            };
        }
    };

    let result = match parsed.command {
        Commands::Play {
            bots,
            auto,
            seed,
            stack,
            rounds_per_level,
            max_rounds,
        } => commands::handle_play_command(
            bots,
            auto,
            seed,
            stack,
            rounds_per_level,
            max_rounds,
            out,
            err,
        ),
        Commands::Sim {
            players,
            games,
            seed,
            output,
            stack,
            rounds_per_level,
        } => commands::handle_sim_command(
            players,
            games,
            seed,
            output,
            stack,
            rounds_per_level,
            out,
            err,
        ),
        Commands::Deal { seed, players } => commands::handle_deal_command(seed, players, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            exit_code::ERROR
        }
    }
}
