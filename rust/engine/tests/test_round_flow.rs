use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use riverline_engine::betting::{ActionProvider, TableView};
use riverline_engine::deck::Deck;
use riverline_engine::errors::EngineError;
use riverline_engine::hand::{evaluate, HandScore};
use riverline_engine::player::{Player, PlayerAction};
use riverline_engine::round::{split_payouts, Round};
use riverline_engine::table::Table;

struct Scripted {
    queue: VecDeque<PlayerAction>,
}

fn scripted(actions: &[PlayerAction]) -> Box<dyn ActionProvider> {
    Box::new(Scripted {
        queue: actions.iter().copied().collect(),
    })
}

impl ActionProvider for Scripted {
    fn request_action(&mut self, _view: &TableView<'_>) -> PlayerAction {
        self.queue.pop_front().unwrap_or(PlayerAction::CheckOrCall)
    }
}

/// Folds, calls or raises at random, like the shipped bot but local to
/// the engine's own tests.
struct Chaotic {
    rng: ChaCha20Rng,
}

impl ActionProvider for Chaotic {
    fn request_action(&mut self, view: &TableView<'_>) -> PlayerAction {
        match self.rng.random_range(0..4u8) {
            0 => PlayerAction::Fold,
            3 if view.legal.can_raise => PlayerAction::Raise(
                self.rng
                    .random_range(view.legal.min_raise_total..=view.legal.max_raise_total),
            ),
            _ => PlayerAction::CheckOrCall,
        }
    }
}

fn chaotic_providers(seats: usize, seed: u64) -> Vec<Box<dyn ActionProvider>> {
    (0..seats)
        .map(|i| {
            Box::new(Chaotic {
                rng: ChaCha20Rng::seed_from_u64(seed.wrapping_add(i as u64)),
            }) as Box<dyn ActionProvider>
        })
        .collect()
}

fn roster(stacks: &[u32]) -> Vec<Player> {
    stacks
        .iter()
        .enumerate()
        .map(|(id, &stack)| Player::new(id, format!("p{}", id), stack))
        .collect()
}

#[test]
fn blinds_come_out_of_the_right_stacks() {
    // Dealer 0: seat 1 posts the small blind, seat 2 the big blind.
    // Everyone folds to the big blind, who collects sb + bb.
    let players = roster(&[50, 50, 50, 50]);
    let mut round = Round::new(&players, 0, (1, 2), 3).unwrap();
    let mut providers = vec![
        scripted(&[PlayerAction::Fold]),
        scripted(&[PlayerAction::Fold]),
        scripted(&[]),
        scripted(&[PlayerAction::Fold]),
    ];
    let outcome = round.play(&mut providers).unwrap();

    assert_eq!(outcome.pot, 3);
    assert_eq!(outcome.winners, vec![2]);
    assert_eq!(outcome.payouts, vec![(2, 3)]);
    assert_eq!(
        outcome.stacks,
        vec![(0, 50), (1, 49), (2, 51), (3, 50)]
    );
}

#[test]
fn single_survivor_ends_the_round_without_showdown() {
    let players = roster(&[20, 20, 20]);
    let mut round = Round::new(&players, 0, (1, 2), 8).unwrap();
    let mut providers = vec![
        scripted(&[PlayerAction::Fold]),
        scripted(&[PlayerAction::Fold]),
        scripted(&[]),
    ];
    let outcome = round.play(&mut providers).unwrap();

    assert!(!outcome.went_to_showdown);
    // The fold-out happened pre-flop, so no community cards were dealt.
    assert!(round.board().is_empty());
    assert_eq!(round.pot(), 0);
    assert_eq!(outcome.winners, vec![2]);
}

#[test]
fn check_down_rounds_match_reference_evaluation() {
    // Everyone calls and checks to showdown; the payout must agree
    // with an independent evaluation of the same (seeded) deck,
    // including split pots when hands tie.
    for seed in 0..30u64 {
        let players = roster(&[30, 30, 30]);
        let mut round = Round::new(&players, 0, (1, 2), seed).unwrap();
        let mut providers = vec![scripted(&[]), scripted(&[]), scripted(&[])];
        let outcome = round.play(&mut providers).unwrap();

        assert!(outcome.went_to_showdown);
        assert_eq!(outcome.pot, 6);

        let mut deck = Deck::new_shuffled(seed);
        let holes: Vec<_> = (0..3).map(|_| deck.deal(2).unwrap()).collect();
        let board = deck.deal(5).unwrap();
        let scores: Vec<HandScore> = holes
            .iter()
            .map(|hole| {
                let mut cards = hole.clone();
                cards.extend(board.iter().copied());
                evaluate(&cards).unwrap()
            })
            .collect();
        let best = *scores.iter().max().unwrap();
        let expected: Vec<usize> = (0..3).filter(|&i| scores[i] == best).collect();

        assert_eq!(outcome.winners, expected, "seed {}", seed);
        assert_eq!(outcome.payouts, split_payouts(6, &expected), "seed {}", seed);
    }
}

#[test]
fn chips_are_conserved_across_random_rounds() {
    for seed in 0..20u64 {
        let players = roster(&[40, 40, 40, 40]);
        let mut round = Round::new(&players, 0, (1, 2), seed).unwrap();
        let mut providers = chaotic_providers(4, seed ^ 0xdead);
        let outcome = round.play(&mut providers).unwrap();

        let total: u32 = outcome.stacks.iter().map(|&(_, s)| s).sum();
        assert_eq!(total, 160, "seed {}", seed);

        let paid: u32 = outcome.payouts.iter().map(|&(_, a)| a).sum();
        assert_eq!(paid, outcome.pot, "seed {}", seed);
        assert_eq!(round.pot(), 0, "seed {}", seed);
    }
}

#[test]
fn folded_seats_never_act_again_in_random_rounds() {
    for seed in 0..20u64 {
        let players = roster(&[40, 40, 40, 40, 40]);
        let mut round = Round::new(&players, 0, (1, 2), seed).unwrap();
        let mut providers = chaotic_providers(5, seed.wrapping_mul(31));
        round.play(&mut providers).unwrap();

        for seat in 0..5 {
            let mut folded = false;
            for record in round.actions().iter().filter(|a| a.seat == seat) {
                assert!(!folded, "seed {}: folded seat {} acted again", seed, seat);
                folded = record.action == PlayerAction::Fold;
            }
        }
    }
}

#[test]
fn a_full_game_conserves_chips_and_crowns_a_champion() {
    let names = ["a", "b", "c", "d"];
    let mut table = Table::new(&names, 20, 2);
    let mut providers = chaotic_providers(4, 99);

    let mut rounds = 0u32;
    while table.champion().is_none() {
        assert!(rounds < 10_000, "game did not terminate");
        let mut round = table.start_round(1000 + u64::from(rounds)).unwrap();
        let outcome = round.play(&mut providers).unwrap();
        table.apply_outcome(&outcome);
        rounds += 1;

        let total: u32 = table.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 80);
    }
    let champion = table.champion().unwrap();
    assert_eq!(champion.stack(), 80);
}

#[test]
fn dealer_rotation_skips_busted_players() {
    let names = ["a", "b", "c"];
    let mut table = Table::new(&names, 10, 100);
    assert_eq!(table.dealer_id(), 0);

    // Hand-crafted outcome: player 1 busts, player 2 doubles up.
    let outcome = riverline_engine::round::RoundOutcome {
        winners: vec![2],
        payouts: vec![(2, 10)],
        stacks: vec![(0, 10), (1, 0), (2, 20)],
        pot: 10,
        went_to_showdown: true,
    };
    table.apply_outcome(&outcome);
    assert_eq!(table.dealer_id(), 2, "busted player 1 must be skipped");
    assert_eq!(table.active_count(), 2);
}

#[test]
fn too_few_players_with_chips_is_an_error() {
    let players = roster(&[20, 0, 0]);
    assert_eq!(
        Round::new(&players, 0, (1, 2), 1).err(),
        Some(EngineError::InsufficientPlayers { active: 1 })
    );

    let names = ["a", "b"];
    let mut table = Table::new(&names, 5, 100);
    let outcome = riverline_engine::round::RoundOutcome {
        winners: vec![0],
        payouts: vec![(0, 5)],
        stacks: vec![(0, 10), (1, 0)],
        pot: 5,
        went_to_showdown: false,
    };
    table.apply_outcome(&outcome);
    assert!(matches!(
        table.start_round(1),
        Err(EngineError::InsufficientPlayers { active: 1 })
    ));
}
