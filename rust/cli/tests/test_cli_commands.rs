use riverline_cli::exit_code;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = riverline_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let (code, first, _) = run(&["riverline", "deal", "--seed", "42", "--players", "6"]);
    assert_eq!(code, exit_code::SUCCESS);
    let (_, second, _) = run(&["riverline", "deal", "--seed", "42", "--players", "6"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 8);
}

#[test]
fn auto_play_reports_a_champion() {
    let (code, out, err) = run(&[
        "riverline", "play", "--auto", "--bots", "3", "--seed", "11", "--stack", "20",
        "--rounds-per-level", "2",
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("wins the game"));
    assert!(err.is_empty());
}

#[test]
fn sim_writes_round_history_to_the_given_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.jsonl");
    let (code, out, _) = run(&[
        "riverline",
        "sim",
        "--players",
        "3",
        "--games",
        "1",
        "--seed",
        "9",
        "--stack",
        "20",
        "--rounds-per-level",
        "2",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("game 1:"));

    let contents = std::fs::read_to_string(&path).unwrap();
    for line in contents.lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("seed").is_some());
        assert!(v.get("payouts").is_some());
    }
}

#[test]
fn sim_rejects_out_of_range_player_counts() {
    let (code, _, err) = run(&["riverline", "sim", "--players", "11", "--seed", "1"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("players must be between 2 and 10"));
}
