mod common;

use common::reachable;
use noughtbot::search::eval::terminal_utility;
use noughtbot::{Board, Mark, Outcome};

#[test]
fn reachable_position_count() {
    assert_eq!(reachable(Mark::X).len(), 5478);
    assert_eq!(reachable(Mark::O).len(), 5478);
}

#[test]
fn incremental_winner_matches_full_scan() {
    for b in reachable(Mark::X) {
        let scanned = Board::scan_winner(b.cells()).expect("reachable boards have one winner at most");
        assert_eq!(b.winner(), scanned, "board {}", b.notation());
    }
}

#[test]
fn terminal_utilities_are_negations() {
    for b in reachable(Mark::X).into_iter().filter(|b| b.winner().is_some()) {
        let ux = terminal_utility(&b, Mark::X).expect("decided");
        let uo = terminal_utility(&b, Mark::O).expect("decided");
        assert_eq!(ux, -uo, "board {}", b.notation());
        assert_eq!(ux.abs(), 1);
    }
}

#[test]
fn completing_the_top_row_wins_for_x() {
    let mut b = Board::new();
    assert!(b.apply_move(0, Mark::X));
    assert!(b.apply_move(3, Mark::O));
    assert!(b.apply_move(1, Mark::X));
    assert!(b.apply_move(4, Mark::O));
    assert_eq!(b.winner(), None);
    assert!(b.apply_move(2, Mark::X));
    assert_eq!(b.winner(), Some(Mark::X));
    assert!(!b.is_full());
    assert_eq!(b.outcome(), Some(Outcome::Win(Mark::X)));
}

#[test]
fn full_board_without_line_is_drawn() {
    let b: Board = "XOX/XOO/OXX".parse().expect("valid board");
    assert!(b.is_full());
    assert_eq!(b.winner(), None);
    assert!(b.available_moves().is_empty());
    assert_eq!(b.outcome(), Some(Outcome::Draw));
}

#[test]
fn every_line_is_detected_from_every_cell_on_it() {
    use noughtbot::board::LINES;
    for line in LINES.iter() {
        for last in 0..3 {
            let mut b = Board::new();
            for (k, &i) in line.iter().enumerate() {
                if k != last { b.apply_move(i, Mark::O); }
            }
            assert_eq!(b.winner(), None);
            b.apply_move(line[last], Mark::O);
            assert_eq!(b.winner(), Some(Mark::O), "line {:?} completed at {}", line, line[last]);
        }
    }
}
