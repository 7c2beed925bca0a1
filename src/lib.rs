// Exhaustive tic-tac-toe solver: board rules plus minimax / alpha-beta search
pub mod board;
pub mod error;
pub mod perft;
pub mod protocol;
pub mod search;
pub mod selfplay;

pub use board::{Board, Mark, Outcome};
pub use error::{Error, Result};
pub use search::{SearchParams, SearchResult, Searcher};
