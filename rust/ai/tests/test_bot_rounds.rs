use riverline_ai::create_bot;
use riverline_engine::betting::ActionProvider;
use riverline_engine::player::Player;
use riverline_engine::round::Round;

fn roster(seats: usize, stack: u32) -> Vec<Player> {
    (0..seats)
        .map(|id| Player::new(id, format!("bot{}", id), stack))
        .collect()
}

fn bots(seats: usize, seed: u64) -> Vec<Box<dyn ActionProvider>> {
    (0..seats)
        .map(|i| create_bot(seed.wrapping_add(i as u64)))
        .collect()
}

#[test]
fn bots_play_whole_rounds_without_errors() {
    for seed in 0..25u64 {
        let players = roster(4, 50);
        let mut round = Round::new(&players, 0, (1, 2), seed).unwrap();
        let outcome = round.play(&mut bots(4, seed * 7 + 1)).unwrap();

        let total: u32 = outcome.stacks.iter().map(|&(_, s)| s).sum();
        assert_eq!(total, 200, "seed {}", seed);
        assert!(!outcome.winners.is_empty());
    }
}

#[test]
fn seeded_bots_reproduce_the_same_round() {
    let run = || {
        let players = roster(3, 40);
        let mut round = Round::new(&players, 0, (1, 2), 77).unwrap();
        let outcome = round.play(&mut bots(3, 500)).unwrap();
        (outcome.winners, outcome.payouts, outcome.pot)
    };
    assert_eq!(run(), run());
}
