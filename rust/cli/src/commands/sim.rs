//! Sim command: bot-only games in bulk, with optional JSONL round
//! histories.

use std::io::Write;

use riverline_ai::create_bot;
use riverline_engine::betting::ActionProvider;
use riverline_engine::logger::{RoundLogger, RoundRecord};
use riverline_engine::table::Table;

use crate::error::CliError;

/// Safety valve only; the escalating blind schedule ends games orders
/// of magnitude sooner.
const MAX_ROUNDS_PER_GAME: u32 = 100_000;

#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    players: usize,
    games: u32,
    seed: Option<u64>,
    output: Option<String>,
    stack: u32,
    rounds_per_level: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=10).contains(&players) {
        return Err(CliError::InvalidInput(
            "players must be between 2 and 10".to_string(),
        ));
    }
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if stack == 0 {
        return Err(CliError::InvalidInput("stack must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "sim: players={} games={} seed={}", players, games, base_seed)?;
    let mut logger = match output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    let names: Vec<String> = (0..players).map(|i| format!("Bot {}", i + 1)).collect();
    for game in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(game) << 24);
        let mut table = Table::new(&names, stack, rounds_per_level);
        let mut providers: Vec<Box<dyn ActionProvider>> = (0..players)
            .map(|i| create_bot(game_seed.wrapping_add(0x51_7c_c1 + i as u64)))
            .collect();

        while table.champion().is_none() && table.rounds_played() < MAX_ROUNDS_PER_GAME {
            let round_seed = game_seed.wrapping_add(u64::from(table.rounds_played()));
            let mut round = table.start_round(round_seed)?;
            let outcome = round.play(&mut providers)?;
            if let Some(logger) = &mut logger {
                let id = logger.next_id();
                logger.write(&RoundRecord::from_round(id, &round, &outcome))?;
            }
            table.apply_outcome(&outcome);
        }

        match table.champion() {
            Some(champion) => writeln!(
                out,
                "game {}: {} wins after {} rounds",
                game + 1,
                champion.name(),
                table.rounds_played()
            )?,
            None => writeln!(
                err,
                "game {}: no champion after {} rounds",
                game + 1,
                MAX_ROUNDS_PER_GAME
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_games_to_completion() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(4, 2, Some(3), None, 20, 2, &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("game 1:"));
        assert!(text.contains("game 2:"));
        assert!(err.is_empty());
    }

    #[test]
    fn writes_round_history_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rounds.jsonl");
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(
            3,
            1,
            Some(9),
            Some(path.to_string_lossy().into_owned()),
            20,
            2,
            &mut out,
            &mut err,
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(!lines.is_empty());
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v.get("round_id").is_some());
            assert!(v.get("winners").is_some());
            assert!(v.get("ts").is_some());
        }
    }

    #[test]
    fn rejects_zero_games() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_sim_command(4, 0, Some(1), None, 20, 10, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
