use crate::board::{Board, Mark};
use crate::search::eval::{terminal_utility, INF};
use crate::search::Searcher;

impl Searcher {
    /// Minimax with alpha-beta cut-offs. Terminal handling and tie-breaks
    /// match [`Searcher::minimax`]; siblings after a cut are never visited.
    pub(crate) fn alphabeta(&mut self, board: &Board, player: Mark, mut alpha: i32, mut beta: i32) -> (i32, Option<usize>) {
        self.nodes += 1;
        let maximizer = self.params.maximizer;
        if let Some(u) = terminal_utility(board, maximizer) { return (u, None); }

        let maximizing = player == maximizer;
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move: Option<usize> = None;
        for m in board.available_moves() {
            let mut child = *board;
            child.apply_move(m, player);
            let (score, _) = self.alphabeta(&child, player.opponent(), alpha, beta);
            if maximizing {
                if score > best { best = score; best_move = Some(m); }
                if best > alpha { alpha = best; }
            } else {
                if score < best { best = score; best_move = Some(m); }
                if best < beta { beta = best; }
            }
            if beta <= alpha { break; }
        }
        (best, best_move)
    }
}
