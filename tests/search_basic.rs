use noughtbot::{Board, Error, Mark, SearchParams, Searcher};

#[test]
fn engine_opening_is_a_reproducible_draw() {
    // O is the maximizer and opens the game.
    let b = Board::new();
    for use_pruning in [false, true] {
        let mut s = Searcher::with_pruning(use_pruning);
        let r1 = s.search(&b, Mark::O);
        let r2 = s.search(&b, Mark::O);
        assert_eq!(r1.score, 0);
        assert_eq!(r1.bestmove, r2.bestmove);
        assert_eq!(r1.bestmove, Some(0));
        assert_eq!(r1.nodes, r2.nodes);
    }
}

#[test]
fn empty_board_is_a_draw_whoever_moves_first() {
    for maximizer in [Mark::X, Mark::O] {
        for first in [Mark::X, Mark::O] {
            let mut s = Searcher::new(SearchParams { use_pruning: true, maximizer });
            assert_eq!(s.search(&Board::new(), first).score, 0, "maximizer {maximizer} first {first}");
        }
    }
}

#[test]
fn maximizer_completes_its_line() {
    let b: Board = "OO./XX./..X".parse().unwrap();
    for use_pruning in [false, true] {
        let mut s = Searcher::with_pruning(use_pruning);
        let r = s.search(&b, Mark::O);
        assert_eq!(r.bestmove, Some(2));
        assert_eq!(r.score, 1);
        assert_eq!(s.get_best_move(&b, Mark::O).unwrap(), 2);
    }
}

#[test]
fn minimizer_completes_its_line() {
    let b: Board = "XX./OO./..O".parse().unwrap();
    let mut s = Searcher::default();
    let r = s.search(&b, Mark::X);
    assert_eq!(r.bestmove, Some(2));
    assert_eq!(r.score, -1);
}

#[test]
fn maximizer_blocks_the_only_threat() {
    let b: Board = "X../XO./...".parse().unwrap();
    for use_pruning in [false, true] {
        let mut s = Searcher::with_pruning(use_pruning);
        let r = s.search(&b, Mark::O);
        assert_eq!(r.bestmove, Some(6));
        assert!(r.score >= 0, "blocking should not lose, got {}", r.score);
    }
}

#[test]
fn full_board_scores_zero_and_refuses_move() {
    let b: Board = "XOX/XOO/OXX".parse().unwrap();
    for use_pruning in [false, true] {
        let mut s = Searcher::with_pruning(use_pruning);
        let r = s.search(&b, Mark::O);
        assert_eq!(r.score, 0);
        assert_eq!(r.bestmove, None);
        assert!(matches!(s.get_best_move(&b, Mark::O), Err(Error::InvalidState)));
    }
}

#[test]
fn search_leaves_caller_board_untouched() {
    let b: Board = "X../.O./...".parse().unwrap();
    let before = b;
    let mut s = Searcher::with_pruning(false);
    let _ = s.search(&b, Mark::X);
    assert_eq!(b, before);
}

#[test]
fn diagnostics_reflect_last_search() {
    let mut s = Searcher::default();
    let r = s.search(&Board::new(), Mark::X);
    assert_eq!(s.nodes(), r.nodes);
    assert_eq!(s.elapsed(), r.elapsed);
    let r2 = s.search(&"XOX/XOO/OXX".parse::<Board>().unwrap(), Mark::O);
    assert_eq!(r2.nodes, 1);
    assert_eq!(s.nodes(), 1);
}
