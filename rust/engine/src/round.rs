//! One hand of poker, from blind posting through payout.
//!
//! A [`Round`] is built fresh for every hand from the table's roster
//! and dealer pointer, owns all per-round state (participants, deck,
//! board, pot), and is discarded after the outcome is reported. Only
//! the stack values in the outcome survive into the next round.

use serde::{Deserialize, Serialize};

use crate::betting::{ActionProvider, BettingPhase};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::evaluate;
use crate::logger::ActionRecord;
use crate::player::{Chips, Player};

/// A betting phase. Each phase reveals a fixed cumulative number of
/// community cards: 0, 3, 4, then 5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::PreFlop, Phase::Flop, Phase::Turn, Phase::River];

    /// Community cards revealed when the phase begins.
    fn reveal_count(self) -> usize {
        match self {
            Phase::PreFlop => 0,
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
        }
    }

}

/// Per-participant state within a betting phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Status {
    /// Must still act this phase.
    Waiting,
    /// Has matched the bet (or checked) since the last raise.
    Acted,
    /// Out of the hand for the rest of the round. Terminal.
    Folded,
}

/// A player's seat in one round: stack snapshot, phase wager, status
/// and hole cards. Owned by the round; the table's `Player` is not
/// touched until the outcome is applied.
#[derive(Debug, Clone)]
pub struct Participant {
    pub player_id: usize,
    pub stack: Chips,
    pub status: Status,
    pub wager: Chips,
    pub hole: Option<[Card; 2]>,
}

impl Participant {
    fn new(player_id: usize, stack: Chips) -> Self {
        Self {
            player_id,
            stack,
            status: Status::Waiting,
            wager: 0,
            hole: None,
        }
    }
}

/// What a round reports back to the table layer.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Player ids of the pot winner(s).
    pub winners: Vec<usize>,
    /// Amount received per winning player id.
    pub payouts: Vec<(usize, Chips)>,
    /// Post-round stack per participating player id.
    pub stacks: Vec<(usize, Chips)>,
    /// Total pot paid out.
    pub pot: Chips,
    /// False when all but one participant folded before showdown.
    pub went_to_showdown: bool,
}

/// The round engine: sequences pre-flop through river, posts blinds,
/// deals cards, runs the betting phases and resolves the pot.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    seed: u64,
    participants: Vec<Participant>,
    dealer_pos: usize,
    board: Vec<Card>,
    pot: Chips,
    blinds: (Chips, Chips),
    actions: Vec<ActionRecord>,
}

impl Round {
    /// Seats every roster player holding chips, in table order, and
    /// shuffles a fresh deck from `seed`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InsufficientPlayers`] when fewer than two players
    /// have chips; the caller should end the game instead.
    pub fn new(
        roster: &[Player],
        dealer_id: usize,
        blinds: (Chips, Chips),
        seed: u64,
    ) -> Result<Self, EngineError> {
        let participants: Vec<Participant> = roster
            .iter()
            .filter(|p| p.is_active_in_game())
            .map(|p| Participant::new(p.id(), p.stack()))
            .collect();
        if participants.len() < 2 {
            return Err(EngineError::InsufficientPlayers {
                active: participants.len(),
            });
        }
        let dealer_pos = participants
            .iter()
            .position(|p| p.player_id == dealer_id)
            .unwrap_or(0);
        Ok(Self {
            deck: Deck::new_shuffled(seed),
            seed,
            participants,
            dealer_pos,
            board: Vec::with_capacity(5),
            pot: 0,
            blinds,
            actions: Vec::new(),
        })
    }

    /// Plays the round to completion: deals hole cards, posts blinds,
    /// runs the four phases (stopping early once all but one seat has
    /// folded) and pays out the pot.
    ///
    /// `providers` is indexed by player id; each seat's actions are
    /// requested from its provider.
    pub fn play(
        &mut self,
        providers: &mut [Box<dyn ActionProvider>],
    ) -> Result<RoundOutcome, EngineError> {
        self.deal_hole_cards()?;
        self.post_blinds();
        let seats = self.participants.len();
        for phase in Phase::ALL {
            let bet_to_match = if phase == Phase::PreFlop {
                // Forced bets are live: the big blind sets the bet.
                self.blinds.1
            } else {
                let reveal = self.deck.deal(phase.reveal_count())?;
                self.board.extend(reveal);
                self.reset_for_phase();
                0
            };
            let start = match phase {
                // Past the dealer, the two blind posters, then first to act.
                Phase::PreFlop => self.dealer_pos + 3,
                _ => self.dealer_pos + 1,
            } % seats;
            let survivors = BettingPhase::new(
                &mut self.participants,
                &mut self.pot,
                &self.board,
                phase,
                bet_to_match,
            )
            .run(start, providers, &mut self.actions);
            if survivors <= 1 {
                return Ok(self.award_uncontested());
            }
        }
        self.showdown()
    }

    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        for seat in 0..self.participants.len() {
            let hole = [self.deck.deal_card()?, self.deck.deal_card()?];
            self.participants[seat].hole = Some(hole);
        }
        Ok(())
    }

    /// Small blind from the seat after the dealer, big blind from the
    /// next. A stack shorter than its blind posts all-in.
    fn post_blinds(&mut self) {
        let seats = self.participants.len();
        let (small, big) = self.blinds;
        self.post((self.dealer_pos + 1) % seats, small);
        self.post((self.dealer_pos + 2) % seats, big);
    }

    fn post(&mut self, seat: usize, amount: Chips) {
        let p = &mut self.participants[seat];
        let paid = amount.min(p.stack);
        p.stack -= paid;
        p.wager += paid;
        self.pot += paid;
    }

    /// Wagers and statuses reset between phases; folds are permanent.
    fn reset_for_phase(&mut self) {
        for p in &mut self.participants {
            p.wager = 0;
            if p.status != Status::Folded {
                p.status = Status::Waiting;
            }
        }
    }

    /// Everyone else folded: the last seat standing takes the pot with
    /// its hole cards never evaluated.
    fn award_uncontested(&mut self) -> RoundOutcome {
        let pot = self.pot;
        let winner = self
            .participants
            .iter()
            .position(|p| p.status != Status::Folded)
            .unwrap_or(0);
        self.participants[winner].stack += pot;
        self.pot = 0;
        self.outcome(vec![winner], vec![(winner, pot)], pot, false)
    }

    /// Compares the best 5-card hand of every non-folded seat; ties
    /// split the pot via [`split_payouts`].
    fn showdown(&mut self) -> Result<RoundOutcome, EngineError> {
        let mut scored = Vec::with_capacity(self.participants.len());
        for (seat, p) in self.participants.iter().enumerate() {
            if p.status == Status::Folded {
                continue;
            }
            let Some(hole) = p.hole else { continue };
            let mut cards = Vec::with_capacity(7);
            cards.extend(hole);
            cards.extend(self.board.iter().copied());
            scored.push((seat, evaluate(&cards)?));
        }
        let best = scored
            .iter()
            .map(|&(_, score)| score)
            .max()
            .ok_or(EngineError::InsufficientPlayers { active: 0 })?;
        let winners: Vec<usize> = scored
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(seat, _)| seat)
            .collect();
        let pot = self.pot;
        let payouts = split_payouts(pot, &winners);
        for &(seat, amount) in &payouts {
            self.participants[seat].stack += amount;
        }
        self.pot = 0;
        Ok(self.outcome(winners, payouts, pot, true))
    }

    fn outcome(
        &self,
        winner_seats: Vec<usize>,
        seat_payouts: Vec<(usize, Chips)>,
        pot: Chips,
        went_to_showdown: bool,
    ) -> RoundOutcome {
        RoundOutcome {
            winners: winner_seats
                .into_iter()
                .map(|s| self.participants[s].player_id)
                .collect(),
            payouts: seat_payouts
                .into_iter()
                .map(|(s, amount)| (self.participants[s].player_id, amount))
                .collect(),
            stacks: self
                .participants
                .iter()
                .map(|p| (p.player_id, p.stack))
                .collect(),
            pot,
            went_to_showdown,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn blinds(&self) -> (Chips, Chips) {
        self.blinds
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Chronological action log across all phases.
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
}

/// Splits `pot` equally among the winning seats. Remainder chips that
/// do not divide evenly go one each to the winners in lowest
/// seat order, so split results are deterministic.
pub fn split_payouts(pot: Chips, winner_seats: &[usize]) -> Vec<(usize, Chips)> {
    let k = winner_seats.len() as Chips;
    if k == 0 {
        return Vec::new();
    }
    let share = pot / k;
    let remainder = pot % k;
    winner_seats
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let extra = if (i as Chips) < remainder { 1 } else { 0 };
            (seat, share + extra)
        })
        .collect()
}
