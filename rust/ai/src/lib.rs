//! # riverline-ai: Action Providers for Riverline Poker
//!
//! Bot implementations of the engine's
//! [`ActionProvider`](riverline_engine::betting::ActionProvider) seam.
//! The only strategy shipped today is [`random::RandomBot`], which
//! picks uniformly among the legal actions without looking at its
//! cards.
//!
//! ## Quick Start
//!
//! ```rust
//! use riverline_ai::create_bot;
//!
//! // One provider per seat, each with its own seed stream.
//! let mut providers: Vec<_> = (0..4u64).map(|i| create_bot(100 + i)).collect();
//! assert_eq!(providers.len(), 4);
//! ```

use riverline_engine::betting::ActionProvider;

pub mod random;

/// A boxed uniformly-random legal bot seeded with `seed`. The same
/// seed yields the same decision stream, which keeps simulations
/// replayable end to end.
pub fn create_bot(seed: u64) -> Box<dyn ActionProvider> {
    Box::new(random::RandomBot::seeded(seed))
}
