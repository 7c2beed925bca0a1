use crate::board::{Board, Mark};
use crate::search::eval::{terminal_utility, INF};
use crate::search::Searcher;

impl Searcher {
    /// Exhaustive minimax. Returns `(utility, move)` with the utility seen
    /// from the maximizer; ties keep the lowest-index move.
    pub(crate) fn minimax(&mut self, board: &Board, player: Mark) -> (i32, Option<usize>) {
        self.nodes += 1;
        let maximizer = self.params.maximizer;
        if let Some(u) = terminal_utility(board, maximizer) { return (u, None); }

        let maximizing = player == maximizer;
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move: Option<usize> = None;
        for m in board.available_moves() {
            let mut child = *board;
            child.apply_move(m, player);
            let (score, _) = self.minimax(&child, player.opponent());
            let better = if maximizing { score > best } else { score < best };
            if better { best = score; best_move = Some(m); }
        }
        (best, best_move)
    }
}
