//! Stdin-backed human action provider.
//!
//! The provider talks to the real terminal directly: it prints the
//! table state to stdout and re-prompts until stdin yields a move
//! inside the legal set. A closed stdin folds, so a piped game cannot
//! hang the engine.

use std::io::{self, BufRead, Write};

use riverline_engine::betting::{ActionProvider, LegalActions, TableView};
use riverline_engine::player::PlayerAction;

pub struct HumanProvider {
    name: String,
}

impl HumanProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn show_state(&self, view: &TableView<'_>) {
        println!();
        println!("--- {} to act ---", self.name);
        if let Some(hole) = view.hole {
            println!("hand:  {} {}", hole[0], hole[1]);
        }
        if view.board.is_empty() {
            println!("board: (pre-flop)");
        } else {
            let cards: Vec<String> = view.board.iter().map(|c| c.to_string()).collect();
            println!("board: {}", cards.join(" "));
        }
        println!(
            "pot: {}  to call: {}  stack: {}",
            view.pot, view.legal.to_call, view.stack
        );
    }

    fn prompt(&self, legal: &LegalActions) -> String {
        let call = if legal.can_check { "c=check" } else { "c=call" };
        if legal.can_raise {
            format!(
                "action [f=fold, {}, r <total> ({}-{})]: ",
                call, legal.min_raise_total, legal.max_raise_total
            )
        } else {
            format!("action [f=fold, {}]: ", call)
        }
    }
}

impl ActionProvider for HumanProvider {
    fn request_action(&mut self, view: &TableView<'_>) -> PlayerAction {
        self.show_state(view);
        let stdin = io::stdin();
        loop {
            print!("{}", self.prompt(&view.legal));
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return PlayerAction::Fold,
                Ok(_) => {}
            }
            match parse_action(&line, &view.legal) {
                Some(action) => return action,
                None => println!("unrecognized or illegal move, try again"),
            }
        }
    }
}

/// Parses `f`, `c`, or `r <total>` against the legal set. Returns
/// `None` for anything unparseable or outside the set, so the caller
/// can re-prompt instead of letting the engine fold the player.
pub fn parse_action(input: &str, legal: &LegalActions) -> Option<PlayerAction> {
    let mut words = input.split_whitespace();
    match words.next()? {
        "f" | "fold" => Some(PlayerAction::Fold),
        "c" | "check" | "call" => Some(PlayerAction::CheckOrCall),
        "r" | "raise" if legal.can_raise => {
            let total: u32 = words.next()?.parse().ok()?;
            if total >= legal.min_raise_total && total <= legal.max_raise_total {
                Some(PlayerAction::Raise(total))
            } else {
                None
            }
        }
        _ => None,
    }
}
