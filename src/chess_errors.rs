//! Error types returned by the rules engine and its text codecs.
//!
//! `MoveError` is what the move API hands back; its numeric codes are stable
//! and shared with callers that report failures as integers. The codec errors
//! carry the offending text so they can be shown to a user as-is.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move")]
    InvalidMove,
    #[error("piece belongs to the side not on move")]
    InvalidColor,
    #[error("source square is off the board or empty")]
    InvalidFromLocation,
    #[error("destination square is off the board or equal to the source")]
    InvalidToLocation,
    #[error("promotion piece must be chosen for this move")]
    MustSetPromotion,
    #[error("game is already over")]
    GameIsOver,
    #[error("move text matches more than one legal move")]
    AmbiguousMove,
    #[error(transparent)]
    Notation(#[from] NotationError),
}

impl MoveError {
    /// Stable numeric code, 1 through 7.
    pub const fn code(&self) -> u8 {
        match self {
            MoveError::InvalidMove | MoveError::Notation(_) => 1,
            MoveError::InvalidColor => 2,
            MoveError::InvalidFromLocation => 3,
            MoveError::InvalidToLocation => 4,
            MoveError::MustSetPromotion => 5,
            MoveError::GameIsOver => 6,
            MoveError::AmbiguousMove => 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("invalid square `{0}`")]
    InvalidSquare(String),
    #[error("unrecognized move text `{0}`")]
    UnrecognizedMove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot is too short: {0} characters")]
    TooShort(usize),
    #[error("invalid piece character `{ch}` at board index {index}")]
    InvalidPiece { index: usize, ch: char },
    #[error("invalid side-to-move marker `{0}`")]
    InvalidColor(char),
    #[error("invalid castling flag `{0}`")]
    InvalidCastlingFlag(char),
    #[error("invalid en-passant field `{0}`")]
    InvalidEnPassant(String),
    #[error("invalid result code `{0}`")]
    InvalidResult(String),
    #[error("missing `:` before the halfmove clock")]
    MissingClockSeparator,
    #[error("invalid halfmove clock `{0}`")]
    InvalidClock(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgnError {
    #[error("malformed header line `{0}`")]
    MalformedHeader(String),
    #[error("games starting from a custom position are not supported")]
    UnsupportedSetup,
    #[error("move {ply} `{text}` could not be played: {source}")]
    Replay {
        ply: usize,
        text: String,
        #[source]
        source: MoveError,
    },
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
