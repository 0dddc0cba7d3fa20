//! Command-line argument definitions for the `riverline` binary.

use clap::{Parser, Subcommand};
use riverline_engine::player::STARTING_STACK;

#[derive(Debug, Parser)]
#[command(
    name = "riverline",
    about = "Multi-player Texas Hold'em table simulator",
    version
)]
pub struct RiverlineCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a single-table game to a champion, interactively or bot-only
    Play {
        /// Number of bot opponents
        #[arg(long, default_value_t = 3)]
        bots: usize,
        /// Run every seat as a bot instead of prompting on stdin
        #[arg(long)]
        auto: bool,
        /// Base RNG seed for decks and bots (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack in chips (half big blinds at level 1)
        #[arg(long, default_value_t = STARTING_STACK)]
        stack: u32,
        /// Rounds between blind level increases
        #[arg(long, default_value_t = 10)]
        rounds_per_level: u32,
        /// Stop after this many rounds even without a champion
        #[arg(long)]
        max_rounds: Option<u32>,
    },
    /// Simulate bot-only games and record round histories
    Sim {
        /// Seats per game (2-10)
        #[arg(long, default_value_t = 4)]
        players: usize,
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// Base RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL round-history output path
        #[arg(long)]
        output: Option<String>,
        /// Starting stack in chips (half big blinds at level 1)
        #[arg(long, default_value_t = STARTING_STACK)]
        stack: u32,
        /// Rounds between blind level increases
        #[arg(long, default_value_t = 10)]
        rounds_per_level: u32,
    },
    /// Deal one hand face up for inspection
    Deal {
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Seats to deal hole cards to (2-10)
        #[arg(long, default_value_t = 4)]
        players: usize,
    },
}
