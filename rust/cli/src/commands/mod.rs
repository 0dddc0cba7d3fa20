//! Command handlers for the `riverline` CLI.
//!
//! Each subcommand lives in its own module with the same pattern: a
//! `pub fn handle_*_command(...) -> Result<(), CliError>` taking
//! `&mut dyn Write` output streams so the handlers stay testable
//! without a terminal.

pub mod deal;
pub mod play;
pub mod sim;

pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
