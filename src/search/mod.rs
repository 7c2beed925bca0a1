pub mod alphabeta;
pub mod eval;
pub mod minimax;

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Mark};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Alpha-beta when true, plain minimax otherwise. Only node count and
    /// time differ between the two.
    pub use_pruning: bool,
    /// Utilities are always reported from this mark's point of view.
    pub maximizer: Mark,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { use_pruning: true, maximizer: Mark::O }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<usize>,
    pub score: i32,
    pub nodes: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
    elapsed: Duration,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0, elapsed: Duration::ZERO }
    }

    pub fn with_pruning(use_pruning: bool) -> Self {
        Self::new(SearchParams { use_pruning, ..SearchParams::default() })
    }

    pub fn params(&self) -> SearchParams { self.params }
    pub fn maximizer(&self) -> Mark { self.params.maximizer }

    /// Nodes visited by the last top-level search.
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Wall-clock time of the last top-level search.
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Full search from `board` with `player` to act. Decided boards yield
    /// their terminal utility and no move.
    pub fn search(&mut self, board: &Board, player: Mark) -> SearchResult {
        self.nodes = 0;
        let t0 = Instant::now();
        let (score, bestmove) = if self.params.use_pruning {
            self.alphabeta(board, player, -eval::INF, eval::INF)
        } else {
            self.minimax(board, player)
        };
        self.elapsed = t0.elapsed();
        debug!(
            "{} search for {}: score={} move={:?} nodes={} elapsed={:.4}s",
            if self.params.use_pruning { "alpha-beta" } else { "minimax" },
            player, score, bestmove, self.nodes, self.elapsed.as_secs_f64()
        );
        SearchResult { bestmove, score, nodes: self.nodes, elapsed: self.elapsed }
    }

    /// Optimal move for `player`. Refuses boards that are already decided.
    pub fn get_best_move(&mut self, board: &Board, player: Mark) -> Result<usize> {
        if board.is_terminal() { return Err(Error::InvalidState); }
        self.search(board, player).bestmove.ok_or(Error::InvalidState)
    }
}
