//! Betting phase controller: drives one phase (pre-flop, flop, turn or
//! river) to closure by cycling the non-folded participants, collecting
//! actions from their providers and reopening action on raises.
//!
//! The turn protocol is an explicit state machine over
//! [`Status`](crate::round::Status) plus a monotonically non-decreasing
//! bet-to-match: a raise moves every other non-folded participant with
//! chips back to `Waiting`, and the phase closes once every non-folded
//! participant has acted and matched the bet (or is all-in below it).

use crate::cards::Card;
use crate::errors::EngineError;
use crate::logger::ActionRecord;
use crate::player::{Chips, PlayerAction};
use crate::round::{Participant, Phase, Status};

/// The legal set handed to an action provider on its turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LegalActions {
    /// Chips owed to stay in, already clamped to the remaining stack.
    pub to_call: Chips,
    /// True when nothing is owed, so `CheckOrCall` checks.
    pub can_check: bool,
    /// True when the stack strictly exceeds the call amount.
    pub can_raise: bool,
    /// Smallest wager total a raise may name.
    pub min_raise_total: Chips,
    /// Largest wager total a raise may reach (current wager + stack).
    pub max_raise_total: Chips,
}

/// Read-only snapshot a provider sees when asked to act.
#[derive(Debug)]
pub struct TableView<'a> {
    pub seat: usize,
    pub player_id: usize,
    /// `None` only before hole cards are dealt, which no betting phase
    /// observes in practice.
    pub hole: Option<[Card; 2]>,
    pub board: &'a [Card],
    pub pot: Chips,
    pub bet_to_match: Chips,
    pub stack: Chips,
    pub wager: Chips,
    pub legal: LegalActions,
}

/// Supplies one action per turn. Implemented by bots
/// (`riverline-ai`) and by the CLI's stdin-backed human provider. A
/// provider returning a move outside [`TableView::legal`] is treated as
/// folding.
pub trait ActionProvider {
    fn request_action(&mut self, view: &TableView<'_>) -> PlayerAction;
}

/// A provider action after checking it against the legal set.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(Chips),
    /// Raise the bet-to-match to this wager total (capped at all-in).
    Raise(Chips),
}

/// Checks a chosen action against the legal set.
///
/// A raise total beyond the all-in cap is clamped rather than rejected;
/// anything else outside the set is an [`EngineError::IllegalAction`],
/// which the phase controller recovers from by substituting a fold.
pub fn validate_action(
    legal: &LegalActions,
    action: PlayerAction,
    seat: usize,
) -> Result<ValidatedAction, EngineError> {
    match action {
        PlayerAction::Fold => Ok(ValidatedAction::Fold),
        PlayerAction::CheckOrCall => {
            if legal.to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                // A short stack's call is capped at all-in; no side pot
                // is computed for the shortfall.
                Ok(ValidatedAction::Call(legal.to_call))
            }
        }
        PlayerAction::Raise(total) => {
            if !legal.can_raise || total < legal.min_raise_total {
                Err(EngineError::IllegalAction { seat })
            } else {
                Ok(ValidatedAction::Raise(total.min(legal.max_raise_total)))
            }
        }
    }
}

/// One betting phase over a shared participant table and pot.
pub struct BettingPhase<'a> {
    participants: &'a mut [Participant],
    pot: &'a mut Chips,
    board: &'a [Card],
    phase: Phase,
    bet_to_match: Chips,
}

impl<'a> BettingPhase<'a> {
    pub fn new(
        participants: &'a mut [Participant],
        pot: &'a mut Chips,
        board: &'a [Card],
        phase: Phase,
        bet_to_match: Chips,
    ) -> Self {
        Self {
            participants,
            pot,
            board,
            phase,
            bet_to_match,
        }
    }

    /// Cycles seats starting at `start` until the phase closes or a
    /// single survivor remains. Providers are indexed by player id.
    /// Returns the number of non-folded participants.
    pub fn run(
        mut self,
        start: usize,
        providers: &mut [Box<dyn ActionProvider>],
        log: &mut Vec<ActionRecord>,
    ) -> usize {
        let seats = self.participants.len();
        let mut pos = start % seats;
        while self.survivors() > 1 && !self.is_closed() {
            if self.must_act(pos) {
                let action = self.collect_action(pos, providers);
                log.push(ActionRecord {
                    seat: pos,
                    player_id: self.participants[pos].player_id,
                    phase: self.phase,
                    action: action.recorded(),
                });
                self.apply_action(pos, action);
            }
            pos = (pos + 1) % seats;
        }
        self.survivors()
    }

    fn survivors(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.status != Status::Folded)
            .count()
    }

    /// Pure closure predicate: every non-folded participant has acted
    /// and matched the bet, or is all-in below it.
    fn is_closed(&self) -> bool {
        self.participants
            .iter()
            .filter(|p| p.status != Status::Folded)
            .all(|p| p.stack == 0 || (p.status == Status::Acted && p.wager == self.bet_to_match))
    }

    fn must_act(&self, seat: usize) -> bool {
        let p = &self.participants[seat];
        if p.status == Status::Folded || p.stack == 0 {
            return false;
        }
        // Acted and nothing raised above their wager since.
        !(p.status == Status::Acted && p.wager == self.bet_to_match)
    }

    fn collect_action(
        &mut self,
        seat: usize,
        providers: &mut [Box<dyn ActionProvider>],
    ) -> ValidatedAction {
        let p = &self.participants[seat];
        let legal = self.legal_for(seat);
        let view = TableView {
            seat,
            player_id: p.player_id,
            hole: p.hole,
            board: self.board,
            pot: *self.pot,
            bet_to_match: self.bet_to_match,
            stack: p.stack,
            wager: p.wager,
            legal,
        };
        let chosen = providers[p.player_id].request_action(&view);
        validate_action(&legal, chosen, seat).unwrap_or(ValidatedAction::Fold)
    }

    pub(crate) fn legal_for(&self, seat: usize) -> LegalActions {
        let p = &self.participants[seat];
        let owed = self.bet_to_match.saturating_sub(p.wager);
        LegalActions {
            to_call: owed.min(p.stack),
            can_check: owed == 0,
            can_raise: p.stack > owed,
            min_raise_total: self.bet_to_match + 1,
            max_raise_total: p.wager + p.stack,
        }
    }

    fn apply_action(&mut self, seat: usize, action: ValidatedAction) {
        match action {
            ValidatedAction::Fold => {
                self.participants[seat].status = Status::Folded;
            }
            ValidatedAction::Check => {
                self.participants[seat].status = Status::Acted;
            }
            ValidatedAction::Call(amount) => {
                let p = &mut self.participants[seat];
                p.stack -= amount;
                p.wager += amount;
                *self.pot += amount;
                p.status = Status::Acted;
            }
            ValidatedAction::Raise(total) => {
                let p = &mut self.participants[seat];
                let added = total.saturating_sub(p.wager).min(p.stack);
                p.stack -= added;
                p.wager += added;
                *self.pot += added;
                p.status = Status::Acted;
                self.bet_to_match = self.participants[seat].wager;
                // The raise reopens action for everyone else still in
                // the hand and holding chips.
                for (other, q) in self.participants.iter_mut().enumerate() {
                    if other != seat && q.status == Status::Acted && q.stack > 0 {
                        q.status = Status::Waiting;
                    }
                }
            }
        }
    }
}

impl ValidatedAction {
    /// The action as written to the round's action log.
    fn recorded(self) -> PlayerAction {
        match self {
            ValidatedAction::Fold => PlayerAction::Fold,
            ValidatedAction::Check | ValidatedAction::Call(_) => PlayerAction::CheckOrCall,
            ValidatedAction::Raise(total) => PlayerAction::Raise(total),
        }
    }
}
