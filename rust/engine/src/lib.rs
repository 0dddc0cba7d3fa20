//! # riverline-engine: Multi-player Hold'em Round Engine
//!
//! A deterministic Texas Hold'em round engine for 2 to 10 players.
//! Sequences the four betting phases, enforces legal actions with
//! raise reopening, deals community and hole cards, and resolves the
//! pot at showdown with exact tie-breaking, all under reproducible
//! seeded RNG.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-of-seven hand evaluation and total-order scoring
//! - [`player`] - Long-lived players, chip amounts and the action type
//! - [`betting`] - Betting phase controller and the action-provider seam
//! - [`round`] - The per-round state machine from blinds to payout
//! - [`table`] - Roster, dealer rotation and the blind schedule
//! - [`logger`] - Round records and JSONL history files
//! - [`errors`] - Error taxonomy for engine operations
//!
//! ## Evaluating a hand
//!
//! ```rust
//! use riverline_engine::cards::{Card, Rank, Suit};
//! use riverline_engine::hand::{evaluate, Category};
//!
//! // The wheel: A-2-3-4-5 plays as a five-high straight.
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Diamonds),
//!     Card::new(Rank::Four, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! let score = evaluate(&cards).unwrap();
//! assert_eq!(score.category, Category::Straight);
//! assert_eq!(score.tiebreaks[0], 5);
//! ```
//!
//! ## Deterministic dealing
//!
//! ```rust
//! use riverline_engine::deck::Deck;
//!
//! let mut a = Deck::new_shuffled(42);
//! let mut b = Deck::new_shuffled(42);
//! assert_eq!(a.deal(5).unwrap(), b.deal(5).unwrap());
//! ```
//!
//! ## Playing a round
//!
//! A [`table::Table`] owns the roster and dealer button and builds one
//! [`round::Round`] per hand; the round requests actions through the
//! [`betting::ActionProvider`] trait (bots live in `riverline-ai`) and
//! reports a [`round::RoundOutcome`] the table applies.

pub mod betting;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod table;
