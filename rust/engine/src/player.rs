use serde::{Deserialize, Serialize};

/// Chip amounts. Denominated in half big blinds so the forced bets stay
/// integral: at blind level 1 the small blind is 1 and the big blind 2.
pub type Chips = u32;

/// Default starting stack: 100 big blinds at level 1.
pub const STARTING_STACK: Chips = 200;

/// A move an action provider may choose. Illegal moves are
/// unrepresentable except for out-of-range raise totals, which the
/// betting controller rejects during validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Forfeit the hand.
    Fold,
    /// Check when nothing is owed, otherwise call (capped at the
    /// remaining stack, i.e. an all-in call).
    CheckOrCall,
    /// Raise the phase's bet-to-match to this new wager total.
    Raise(Chips),
}

/// A player at the table, long-lived across rounds. Only the stack
/// changes between rounds; per-round state lives in
/// [`crate::round::Participant`].
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    name: String,
    stack: Chips,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> Chips {
        self.stack
    }

    /// Whether the player can still be dealt into a round.
    pub fn is_active_in_game(&self) -> bool {
        self.stack > 0
    }

    pub(crate) fn set_stack(&mut self, stack: Chips) {
        self.stack = stack;
    }
}
