//! Move execution.
//!
//! Validates a requested move against the legal candidate set, then applies
//! it to the board and state with every special-move side effect. Nothing is
//! mutated until all checks have passed.

use crate::chess_errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KING_SIDE_CASTLE_FILES, KING_SIDE_ROOK_FILE, QUEEN_SIDE_CASTLE_FILES, QUEEN_SIDE_ROOK_FILE,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::en_passant_victim_square;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::move_descriptions::{PlyRecord, SourceHint};

/// Applies `from -> to` for the side to move.
///
/// The returned record has no check annotation yet and the side to move is
/// left unchanged; the caller finishes both.
pub fn apply_move(
    board: &mut Board,
    state: &mut GameState,
    from: (i8, i8),
    to: (i8, i8),
    promotion: Option<PieceKind>,
) -> Result<PlyRecord, MoveError> {
    if state.is_over() {
        return Err(MoveError::GameIsOver);
    }
    let from = Square::from_coords(from.0, from.1).ok_or(MoveError::InvalidFromLocation)?;
    let moving = board.get(from).ok_or(MoveError::InvalidFromLocation)?;
    let to = Square::from_coords(to.0, to.1).ok_or(MoveError::InvalidToLocation)?;
    if to == from {
        return Err(MoveError::InvalidToLocation);
    }
    if moving.color != state.side_to_move {
        return Err(MoveError::InvalidColor);
    }

    let candidate = legal_moves_from(board, state, from)
        .into_iter()
        .find(|candidate| candidate.to == to)
        .ok_or(MoveError::InvalidMove)?;

    let promotion = match candidate.special {
        SpecialMove::Promotion => match promotion {
            None => return Err(MoveError::MustSetPromotion),
            Some(kind) if !kind.is_promotion_target() => return Err(MoveError::InvalidMove),
            Some(kind) => Some(kind),
        },
        _ => None,
    };

    let capture = candidate.special == SpecialMove::EnPassantCapture || board.get(to).is_some();
    let source_hint = source_hint_for(board, state, moving, from, to, capture);

    let side = moving.color;
    let home = side.home_rank();

    board.set(from, None);
    match candidate.special {
        SpecialMove::EnPassantCapture => {
            if let Some(victim) = en_passant_victim_square(from, to) {
                board.set(victim, None);
            }
        }
        SpecialMove::KingSideCastle => {
            move_rook(board, home, KING_SIDE_ROOK_FILE, KING_SIDE_CASTLE_FILES.1);
        }
        SpecialMove::QueenSideCastle => {
            move_rook(board, home, QUEEN_SIDE_ROOK_FILE, QUEEN_SIDE_CASTLE_FILES.1);
        }
        _ => {}
    }
    let placed = Piece::new(side, promotion.unwrap_or(moving.kind));
    board.set(to, Some(placed));

    update_castling_rights(&mut state.castling_rights, moving, from, to, capture);

    state.en_passant_square = if candidate.special == SpecialMove::DoublePush {
        Square::new(from.file(), (from.rank() + to.rank()) / 2)
    } else {
        None
    };

    if moving.kind == PieceKind::Pawn || capture {
        state.halfmove_clock = 0;
    } else {
        state.halfmove_clock = state.halfmove_clock.saturating_add(1);
    }

    Ok(PlyRecord {
        mover: side,
        piece: moving.kind,
        from,
        to,
        capture,
        promotion,
        check: None,
        special: candidate.special,
        source_hint,
    })
}

fn move_rook(board: &mut Board, rank: u8, from_file: u8, to_file: u8) {
    let (Some(rook_from), Some(rook_to)) = (Square::new(from_file, rank), Square::new(to_file, rank))
    else {
        return;
    };
    let rook = board.take(rook_from);
    board.set(rook_to, rook);
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    moving: Piece,
    from: Square,
    to: Square,
    capture: bool,
) {
    if moving.kind == PieceKind::King {
        rights.clear_both(moving.color);
    }

    if moving.kind == PieceKind::Rook && from.rank() == moving.color.home_rank() {
        rights.clear_for_corner(from);
    }

    // Capturing on an enemy home corner also removes the enemy's right.
    if capture && to.rank() == moving.color.opposite().home_rank() {
        rights.clear_for_corner(to);
    }
}

/// Source parts short notation needs to tell this move apart from moves of
/// other same-kind pieces that can reach the same destination.
fn source_hint_for(
    board: &Board,
    state: &GameState,
    moving: Piece,
    from: Square,
    to: Square,
    capture: bool,
) -> SourceHint {
    if moving.kind == PieceKind::Pawn {
        return if capture { SourceHint::FILE } else { SourceHint::NONE };
    }

    let rivals: Vec<Square> = board
        .pieces_of(moving.color)
        .filter(|&(square, kind)| kind == moving.kind && square != from)
        .map(|(square, _)| square)
        .filter(|&square| legal_moves_from(board, state, square).iter().any(|c| c.to == to))
        .collect();

    if rivals.is_empty() {
        SourceHint::NONE
    } else if rivals.iter().all(|square| square.file() != from.file()) {
        SourceHint::FILE
    } else if rivals.iter().all(|square| square.rank() != from.rank()) {
        SourceHint::RANK
    } else {
        SourceHint::BOTH
    }
}
