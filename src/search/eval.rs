use crate::board::{Board, Mark};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

// Search window bounds; strictly outside every reachable utility.
pub const INF: i32 = i32::MAX;

/// Utility of a decided board from `maximizer`'s point of view, or `None`
/// while the game is still open.
pub fn terminal_utility(board: &Board, maximizer: Mark) -> Option<i32> {
    match board.winner() {
        Some(w) if w == maximizer => Some(WIN_SCORE),
        Some(_) => Some(LOSS_SCORE),
        None if board.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}
