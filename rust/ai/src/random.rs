//! A bot that chooses uniformly among its legal actions.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use riverline_engine::betting::{ActionProvider, TableView};
use riverline_engine::player::PlayerAction;

/// Picks fold, check/call or raise with equal probability among
/// whichever of those are legal; a raise names a uniformly random
/// total between the minimum and the all-in cap.
#[derive(Debug)]
pub struct RandomBot {
    rng: ChaCha20Rng,
}

impl RandomBot {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl ActionProvider for RandomBot {
    fn request_action(&mut self, view: &TableView<'_>) -> PlayerAction {
        // Fold and check/call are always in the legal set (a short
        // stack's call is capped at all-in by the engine).
        let choices = if view.legal.can_raise { 3 } else { 2 };
        match self.rng.random_range(0..choices) {
            0 => PlayerAction::Fold,
            1 => PlayerAction::CheckOrCall,
            _ => {
                let total = self
                    .rng
                    .random_range(view.legal.min_raise_total..=view.legal.max_raise_total);
                PlayerAction::Raise(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riverline_engine::betting::{validate_action, LegalActions};

    fn view(legal: LegalActions) -> TableView<'static> {
        TableView {
            seat: 0,
            player_id: 0,
            hole: None,
            board: &[],
            pot: 3,
            bet_to_match: legal.to_call,
            stack: 50,
            wager: 0,
            legal,
        }
    }

    #[test]
    fn choices_always_validate() {
        let legal = LegalActions {
            to_call: 2,
            can_check: false,
            can_raise: true,
            min_raise_total: 3,
            max_raise_total: 50,
        };
        let mut bot = RandomBot::seeded(7);
        let v = view(legal);
        for _ in 0..500 {
            let action = bot.request_action(&v);
            assert!(validate_action(&legal, action, 0).is_ok());
        }
    }

    #[test]
    fn never_raises_when_raising_is_illegal() {
        let legal = LegalActions {
            to_call: 5,
            can_check: false,
            can_raise: false,
            min_raise_total: 6,
            max_raise_total: 5,
        };
        let mut bot = RandomBot::seeded(11);
        let v = view(legal);
        for _ in 0..500 {
            assert!(!matches!(bot.request_action(&v), PlayerAction::Raise(_)));
        }
    }

    #[test]
    fn same_seed_same_decisions() {
        let legal = LegalActions {
            to_call: 0,
            can_check: true,
            can_raise: true,
            min_raise_total: 1,
            max_raise_total: 40,
        };
        let mut a = RandomBot::seeded(42);
        let mut b = RandomBot::seeded(42);
        let v = view(legal);
        for _ in 0..100 {
            assert_eq!(a.request_action(&v), b.request_action(&v));
        }
    }
}
