//! Move text in coordinate, long and short algebraic styles.
//!
//! Formatting works purely from a [`PlyRecord`]; everything short notation
//! needs (capture flag, disambiguation hint, check mark) is recorded when the
//! move is played. Parsing is lenient and produces a [`MoveHint`] that
//! `Game::resolve_move_text` turns into a concrete move.

use crate::chess_errors::NotationError;
use crate::game_state::chess_rules::{KING_HOME_FILE, KING_SIDE_CASTLE_FILES, QUEEN_SIDE_CASTLE_FILES};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::PlyRecord;
use crate::utils::algebraic::{file_from_char, file_to_char, rank_from_char, rank_to_char};

const KING_SIDE_CASTLE: &str = "O-O";
const QUEEN_SIDE_CASTLE: &str = "O-O-O";
const KEPT_CHARS: &str = "KQRNBPabcdefgh12345678";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationStyle {
    /// Source and destination only: `e2e4`, `e7e8Q`.
    Coordinate,
    /// `Ng1-f3`, `e5xd6`, `e7-e8=Q+`.
    Long,
    /// Standard algebraic: `Nf3`, `exd6`, `e8=Q+`.
    Short,
}

/// What a piece of move text says about the move.
///
/// `piece` is `None` when the source square is fully given; the move is then
/// applied directly from `(from_file, from_rank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveHint {
    pub piece: Option<PieceKind>,
    pub from_file: Option<u8>,
    pub from_rank: Option<u8>,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveHint {
    /// Source square when both coordinates are known.
    #[inline]
    pub fn source(&self) -> Option<Square> {
        Square::new(self.from_file?, self.from_rank?)
    }
}

pub fn format_ply(ply: &PlyRecord, style: NotationStyle) -> String {
    let mut out = String::with_capacity(8);

    if style == NotationStyle::Coordinate {
        out.push_str(&ply.from.to_string());
        out.push_str(&ply.to.to_string());
        if let Some(kind) = ply.promotion {
            out.push(kind.letter());
        }
        return out;
    }

    match ply.special {
        SpecialMove::KingSideCastle => out.push_str(KING_SIDE_CASTLE),
        SpecialMove::QueenSideCastle => out.push_str(QUEEN_SIDE_CASTLE),
        _ => {
            if ply.piece != PieceKind::Pawn {
                out.push(ply.piece.letter());
            }
            match style {
                NotationStyle::Long => {
                    out.push_str(&ply.from.to_string());
                    out.push(if ply.capture { 'x' } else { '-' });
                }
                _ => {
                    if ply.source_hint.file {
                        out.push(file_to_char(ply.from.file()));
                    }
                    if ply.source_hint.rank {
                        out.push(rank_to_char(ply.from.rank()));
                    }
                    if ply.capture {
                        out.push('x');
                    }
                }
            }
            out.push_str(&ply.to.to_string());
            if let Some(kind) = ply.promotion {
                out.push('=');
                out.push(kind.letter());
            }
        }
    }

    if let Some(mark) = ply.check {
        out.push(mark.suffix());
    }
    out
}

/// Reads move text in any of the supported styles for the side `side`.
pub fn parse_move_text(text: &str, side: Color) -> Result<MoveHint, NotationError> {
    let unrecognized = || NotationError::UnrecognizedMove(text.to_owned());
    let trimmed = text.trim().trim_end_matches(['+', '#', '!', '?']);

    let castle_files = match trimmed {
        "O-O" | "0-0" => Some(KING_SIDE_CASTLE_FILES.0),
        "O-O-O" | "0-0-0" => Some(QUEEN_SIDE_CASTLE_FILES.0),
        _ => None,
    };
    if let Some(king_to_file) = castle_files {
        let home = side.home_rank();
        return Ok(MoveHint {
            piece: None,
            from_file: Some(KING_HOME_FILE),
            from_rank: Some(home),
            to: Square::new(king_to_file, home).ok_or_else(unrecognized)?,
            promotion: None,
        });
    }

    // Coordinate text may carry a lowercase promotion letter (`e7e8q`).
    let mut raw: Vec<char> = trimmed.chars().collect();
    if let [.., rank, last] = &mut raw[..] {
        if rank.is_ascii_digit() && matches!(*last, 'q' | 'r' | 'b' | 'n') {
            last.make_ascii_uppercase();
        }
    }

    let mut chars: Vec<char> = raw
        .into_iter()
        .collect::<String>()
        .replace("e.p.", "")
        .chars()
        .filter(|ch| KEPT_CHARS.contains(*ch))
        .collect();

    let promotion = match chars.last() {
        Some(&ch) if matches!(ch, 'Q' | 'R' | 'B' | 'N') => {
            chars.pop();
            PieceKind::from_letter(ch)
        }
        _ => None,
    };

    let (Some(rank_ch), Some(file_ch)) = (chars.pop(), chars.pop()) else {
        return Err(unrecognized());
    };
    let to = match (file_from_char(file_ch), rank_from_char(rank_ch)) {
        (Some(file), Some(rank)) => Square::new(file, rank).ok_or_else(unrecognized)?,
        _ => return Err(unrecognized()),
    };

    let mut rest = chars.into_iter().peekable();
    let piece = match rest.peek() {
        Some(&ch) if ch.is_ascii_uppercase() => {
            rest.next();
            PieceKind::from_letter(ch).ok_or_else(unrecognized)?
        }
        _ => PieceKind::Pawn,
    };

    let mut from_file = None;
    let mut from_rank = None;
    for ch in rest {
        if let Some(file) = file_from_char(ch) {
            if from_file.replace(file).is_some() {
                return Err(unrecognized());
            }
        } else if let Some(rank) = rank_from_char(ch) {
            if from_rank.replace(rank).is_some() {
                return Err(unrecognized());
            }
        } else {
            return Err(unrecognized());
        }
    }

    let piece = if from_file.is_some() && from_rank.is_some() {
        None
    } else {
        Some(piece)
    };

    Ok(MoveHint {
        piece,
        from_file,
        from_rank,
        to,
        promotion,
    })
}
