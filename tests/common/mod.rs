use noughtbot::{Board, Mark};
use std::collections::HashSet;

/// Every distinct board reachable from the empty board when `first` opens,
/// decided boards included, in notation order.
pub fn reachable(first: Mark) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];
    while let Some(b) = stack.pop() {
        if !seen.insert(b) || b.is_terminal() { continue; }
        let p = b.side_to_move(first);
        for m in b.available_moves() {
            let mut c = b;
            assert!(c.apply_move(m, p), "available move {m} refused on {}", b.notation());
            stack.push(c);
        }
    }
    let mut v: Vec<Board> = seen.into_iter().collect();
    v.sort_by_key(|b| b.notation());
    v
}
