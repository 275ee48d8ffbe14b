//! Recorded ply descriptions.
//!
//! A `PlyRecord` is the fully specified move that was played, kept in the
//! history and consumed by the notation codec. Everything notation needs is
//! captured at move time so formatting never has to look at a board.

use crate::game_state::chess_types::*;

/// Which parts of the source square short notation must show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceHint {
    pub file: bool,
    pub rank: bool,
}

impl SourceHint {
    pub const NONE: Self = Self {
        file: false,
        rank: false,
    };
    pub const FILE: Self = Self {
        file: true,
        rank: false,
    };
    pub const RANK: Self = Self {
        file: false,
        rank: true,
    };
    pub const BOTH: Self = Self {
        file: true,
        rank: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlyRecord {
    pub mover: Color,
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
    pub check: Option<CheckMark>,
    pub special: SpecialMove,
    pub source_hint: SourceHint,
}

impl PlyRecord {
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.check == Some(CheckMark::Checkmate)
    }

    #[inline]
    pub fn gives_check(&self) -> bool {
        self.check.is_some()
    }
}
