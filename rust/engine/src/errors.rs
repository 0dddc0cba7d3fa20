use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Evaluator misuse: fewer than 5 cards cannot form a poker hand.
    #[error("cannot evaluate a hand of {got} cards, need at least 5")]
    InvalidHandSize { got: usize },
    /// More cards requested than the deck has left. Should never occur
    /// with ten or fewer seats.
    #[error("deck exhausted: {requested} card(s) requested, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
    /// A round needs at least two players holding chips.
    #[error("cannot start a round with {active} player(s) holding chips")]
    InsufficientPlayers { active: usize },
    /// An action provider returned a move outside the legal set. The
    /// betting controller recovers from this by substituting a fold.
    #[error("seat {seat} chose an action outside the legal set")]
    IllegalAction { seat: usize },
}
