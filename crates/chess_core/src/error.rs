use thiserror::Error;

/// Reasons a position record fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 4 to 6 fields, found {0}")]
    FieldCount(usize),
    #[error("expected 8 ranks in board section, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files")]
    RankWidth { rank: usize, files: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}
