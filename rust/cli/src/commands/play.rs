//! Play command: run a single-table game to a champion.
//!
//! Seat 0 is the human (stdin prompts) unless `--auto` makes every
//! seat a bot. One action provider per player persists across rounds;
//! each round gets its own deck seed derived from the base seed.

use std::io::Write;

use riverline_ai::create_bot;
use riverline_engine::betting::ActionProvider;
use riverline_engine::table::Table;

use crate::error::CliError;
use crate::human::HumanProvider;

#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    bots: usize,
    auto: bool,
    seed: Option<u64>,
    stack: u32,
    rounds_per_level: u32,
    max_rounds: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seats = if auto { bots } else { bots + 1 };
    if !(2..=10).contains(&seats) {
        return Err(CliError::InvalidInput(
            "need between 2 and 10 seats (adjust --bots)".to_string(),
        ));
    }
    if stack == 0 {
        return Err(CliError::InvalidInput("stack must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut names: Vec<String> = Vec::with_capacity(seats);
    let mut providers: Vec<Box<dyn ActionProvider>> = Vec::with_capacity(seats);
    if !auto {
        names.push("You".to_string());
        providers.push(Box::new(HumanProvider::new("You")));
    }
    for i in 0..bots {
        names.push(format!("Bot {}", i + 1));
        providers.push(create_bot(seed.wrapping_add(0x9e37_79b9).wrapping_add(i as u64)));
    }

    writeln!(out, "play: seats={} seed={}", seats, seed)?;
    let mut table = Table::new(&names, stack, rounds_per_level);

    loop {
        if let Some(champion) = table.champion() {
            writeln!(
                out,
                "{} wins the game after {} rounds",
                champion.name(),
                table.rounds_played()
            )?;
            return Ok(());
        }
        if let Some(cap) = max_rounds {
            if table.rounds_played() >= cap {
                writeln!(err, "stopped after {} rounds without a champion", cap)?;
                return Ok(());
            }
        }

        let round_seed = seed.wrapping_add(u64::from(table.rounds_played()));
        let mut round = table.start_round(round_seed)?;
        let outcome = round.play(&mut providers)?;

        let winners: Vec<&str> = outcome
            .winners
            .iter()
            .map(|&id| table.players()[id].name())
            .collect();
        let how = if outcome.went_to_showdown {
            "at showdown"
        } else {
            "uncontested"
        };
        let (small, big) = table.blinds();
        writeln!(
            out,
            "round {} (blinds {}/{}): {} take(s) pot {} {}",
            table.rounds_played() + 1,
            small,
            big,
            winners.join(", "),
            outcome.pot,
            how
        )?;
        table.apply_outcome(&outcome);
    }
}
