//! Deal command: deal a single hand face up for inspection.

use std::io::Write;

use riverline_engine::deck::Deck;

use crate::error::CliError;

/// Deals hole cards to `players` seats plus the full 5-card board and
/// prints everything. Seeded dealing is reproducible.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 10".to_string(),
        ));
    }
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_shuffled(seed);
    writeln!(out, "seed: {}", seed)?;
    for seat in 0..players {
        let hole = deck.deal(2)?;
        writeln!(out, "Seat {}: {} {}", seat, hole[0], hole[1])?;
    }
    let board = deck.deal(5)?;
    let cards: Vec<String> = board.iter().map(|c| c.to_string()).collect();
    writeln!(out, "Board: {}", cards.join(" "))?;
    Ok(())
}
