use thiserror::Error;

/// Errors raised at the board boundary and by the self-play record I/O.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal move: the board is already decided or full")]
    InvalidState,

    #[error("cell {index} is out of range (must be 0-8)")]
    OutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("invalid board notation '{notation}': {reason}")]
    InvalidNotation { notation: String, reason: String },

    #[error("both marks complete a line")]
    ConflictingWinners,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
