use noughtbot::selfplay::{generate_games, read_jsonl, write_jsonl, SelfPlayParams};
use noughtbot::{Mark, Outcome};
use pretty_assertions::assert_eq;

#[test]
fn write_and_read_jsonl() {
    let params = SelfPlayParams { games: 6, seed: 7, random_plies: 3, use_pruning: true, first: Mark::X };
    let games = generate_games(&params).unwrap();
    assert_eq!(games.len(), 6);
    let path = std::path::Path::new("target/selfplay_test/games.jsonl");
    write_jsonl(&games, path).unwrap();
    let back = read_jsonl(path).unwrap();
    assert_eq!(back, games);
}

#[test]
fn records_replay_to_their_outcome() {
    let params = SelfPlayParams { games: 8, seed: 11, random_plies: 4, use_pruning: false, first: Mark::O };
    for g in generate_games(&params).unwrap() {
        let board = g.replay().unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(g.outcome));
    }
}

#[test]
fn engine_never_loses_from_the_start() {
    let params = SelfPlayParams { games: 4, random_plies: 0, ..SelfPlayParams::default() };
    for g in generate_games(&params).unwrap() {
        assert_eq!(g.outcome, Outcome::Draw);
        assert!(g.nodes > 0);
    }
}
