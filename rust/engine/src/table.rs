//! Long-lived table state: the roster, the dealer button and the blind
//! schedule. The table never plays a hand itself; it constructs a
//! fresh [`Round`] per hand and applies the reported outcome.

use crate::errors::EngineError;
use crate::player::{Chips, Player};
use crate::round::{Round, RoundOutcome};

/// Forced bets for a blind level: (small, big), doubling per level.
/// Level 1 is (1, 2) in half-big-blind chip units. Levels are clamped
/// to 20 so the shifts stay well inside `Chips`.
pub fn blinds_for_level(level: u32) -> (Chips, Chips) {
    let level = level.clamp(1, 20);
    let small = 1u32 << (level - 1);
    (small, small * 2)
}

/// A poker table playing rounds under an escalating blind schedule
/// until one player holds all the chips.
#[derive(Debug)]
pub struct Table {
    players: Vec<Player>,
    dealer: usize,
    rounds_played: u32,
    rounds_per_level: u32,
}

impl Table {
    /// Seats one player per name, all with `starting_stack` chips. The
    /// button starts at seat 0; the blind level rises every
    /// `rounds_per_level` rounds.
    pub fn new<S: AsRef<str>>(names: &[S], starting_stack: Chips, rounds_per_level: u32) -> Self {
        let players = names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name.as_ref(), starting_stack))
            .collect();
        Self {
            players,
            dealer: 0,
            rounds_played: 0,
            rounds_per_level: rounds_per_level.max(1),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer_id(&self) -> usize {
        self.dealer
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn blind_level(&self) -> u32 {
        self.rounds_played / self.rounds_per_level + 1
    }

    pub fn blinds(&self) -> (Chips, Chips) {
        blinds_for_level(self.blind_level())
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active_in_game()).count()
    }

    /// The last player with chips, once everyone else is busted.
    pub fn champion(&self) -> Option<&Player> {
        let mut active = self.players.iter().filter(|p| p.is_active_in_game());
        match (active.next(), active.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }

    /// Builds the next round from the current roster, dealer and
    /// blinds. Fails with [`EngineError::InsufficientPlayers`] when the
    /// game is over.
    pub fn start_round(&self, seed: u64) -> Result<Round, EngineError> {
        Round::new(&self.players, self.dealer, self.blinds(), seed)
    }

    /// Writes the round's stacks back to the roster, advances the
    /// round counter and passes the button to the next player with
    /// chips.
    pub fn apply_outcome(&mut self, outcome: &RoundOutcome) {
        for &(player_id, stack) in &outcome.stacks {
            if let Some(p) = self.players.get_mut(player_id) {
                p.set_stack(stack);
            }
        }
        self.rounds_played += 1;
        self.rotate_dealer();
    }

    fn rotate_dealer(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let candidate = (self.dealer + step) % n;
            if self.players[candidate].is_active_in_game() {
                self.dealer = candidate;
                return;
            }
        }
    }
}
