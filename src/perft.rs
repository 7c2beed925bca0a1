use crate::board::{Board, Mark, Outcome};

// Move sequences of exactly `depth` plies; decided boards end a line early.
pub fn perft(board: &Board, player: Mark, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if board.is_terminal() { return 0; }
    let mut nodes = 0u64;
    for m in board.available_moves() {
        let mut child = *board;
        child.apply_move(m, player);
        nodes += perft(&child, player.opponent(), depth - 1);
    }
    nodes
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GameCounts {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameCounts {
    pub fn total(&self) -> u64 { self.x_wins + self.o_wins + self.draws }

    fn add(&mut self, other: GameCounts) {
        self.x_wins += other.x_wins;
        self.o_wins += other.o_wins;
        self.draws += other.draws;
    }
}

/// Every complete game reachable from `board`, tallied by outcome.
pub fn count_games(board: &Board, player: Mark) -> GameCounts {
    let mut counts = GameCounts::default();
    match board.outcome() {
        Some(Outcome::Win(Mark::X)) => counts.x_wins = 1,
        Some(Outcome::Win(Mark::O)) => counts.o_wins = 1,
        Some(Outcome::Draw) => counts.draws = 1,
        None => {
            for m in board.available_moves() {
                let mut child = *board;
                child.apply_move(m, player);
                counts.add(count_games(&child, player.opponent()));
            }
        }
    }
    counts
}
