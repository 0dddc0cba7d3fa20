use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// A shuffled 52-card deck. Dealing advances a cursor rather than
/// mutating the card vector, so a deck can be reshuffled cheaply
/// between rounds.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// A freshly shuffled deck. The same seed always yields the same
    /// card order, which is what makes rounds replayable.
    pub fn new_shuffled(seed: u64) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.reshuffle();
        deck
    }

    /// Restores all 52 cards and shuffles them with the deck's RNG.
    pub fn reshuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the next `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if n > self.remaining() {
            return Err(EngineError::DeckExhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    /// Removes and returns the single next card.
    pub fn deal_card(&mut self) -> Result<Card, EngineError> {
        match self.cards.get(self.position) {
            Some(&card) => {
                self.position += 1;
                Ok(card)
            }
            None => Err(EngineError::DeckExhausted {
                requested: 1,
                remaining: 0,
            }),
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
