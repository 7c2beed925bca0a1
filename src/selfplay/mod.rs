use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, Outcome};
use crate::error::{Error, Result};
use crate::search::{SearchParams, Searcher};

#[derive(Debug, Clone)]
pub struct SelfPlayParams {
    pub games: usize,
    pub seed: u64,
    /// Plies at the start of each game picked uniformly at random.
    pub random_plies: usize,
    pub use_pruning: bool,
    pub first: Mark,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 16, seed: 42, random_plies: 2, use_pruning: true, first: Mark::X }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first: Mark,
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub nodes: u64,
}

impl GameRecord {
    /// Replays the moves from an empty board.
    pub fn replay(&self) -> Result<Board> {
        let mut board = Board::new();
        let mut player = self.first;
        for &m in &self.moves {
            board.play(m, player)?;
            player = player.opponent();
        }
        Ok(board)
    }
}

// Mixes the index so neighbouring seeds do not share shifted game streams.
fn game_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Plays one game. The same `(params, index)` always yields the same game.
pub fn play_game(params: &SelfPlayParams, index: usize) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(game_seed(params.seed, index));
    let mut searcher = Searcher::new(SearchParams { use_pruning: params.use_pruning, ..SearchParams::default() });
    let mut board = Board::new();
    let mut player = params.first;
    let mut record = GameRecord { first: params.first, moves: Vec::new(), outcome: Outcome::Draw, nodes: 0 };
    while !board.is_terminal() {
        let mv = if record.moves.len() < params.random_plies {
            *board.available_moves().choose(&mut rng).ok_or(Error::InvalidState)?
        } else {
            let mv = searcher.get_best_move(&board, player)?;
            record.nodes += searcher.nodes();
            mv
        };
        board.play(mv, player)?;
        record.moves.push(mv);
        player = player.opponent();
    }
    record.outcome = board.outcome().ok_or(Error::InvalidState)?;
    Ok(record)
}

/// Games are independent, so they are played in parallel on the rayon pool.
pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    let games = (0..params.games)
        .into_par_iter()
        .map(|i| play_game(params, i))
        .collect::<Result<Vec<_>>>()?;
    let decisive = games.iter().filter(|g| g.outcome != Outcome::Draw).count();
    info!("self-play: {} games, {} decisive, seed={}", games.len(), decisive, params.seed);
    Ok(games)
}

/// One JSON record per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut games = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        games.push(serde_json::from_str(&line)?);
    }
    Ok(games)
}
