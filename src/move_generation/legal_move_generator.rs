//! Full legal move generation pipeline.
//!
//! Dispatches to the per-piece pseudo-legal generators, then hands the
//! candidates to the king-safety filter on a scratch copy of the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_filter::retain_king_safe;
use crate::move_generation::legal_move_shared::Candidate;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::GeneratedMove;

/// Legal destinations for the piece on `from`.
///
/// Empty when the square is empty, holds a piece of the side not to move, or
/// the game is already over.
pub fn legal_moves_from(board: &Board, state: &GameState, from: Square) -> Vec<Candidate> {
    if state.is_over() {
        return Vec::new();
    }
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    if piece.color != state.side_to_move {
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, state, from, &mut candidates),
        PieceKind::Knight => generate_knight_moves(board, from, &mut candidates),
        PieceKind::Bishop => generate_bishop_moves(board, from, &mut candidates),
        PieceKind::Rook => generate_rook_moves(board, from, &mut candidates),
        PieceKind::Queen => generate_queen_moves(board, from, &mut candidates),
        PieceKind::King => generate_king_moves(board, state, from, &mut candidates),
    }

    let mut scratch = board.clone();
    retain_king_safe(&mut scratch, from, &mut candidates);
    candidates
}

/// Every legal move for the side to move, in a1..h8 source order.
pub fn generate_legal_moves(board: &Board, state: &GameState) -> Vec<GeneratedMove> {
    let mut legal = Vec::with_capacity(64);
    for (from, kind) in board.pieces_of(state.side_to_move) {
        for candidate in legal_moves_from(board, state, from) {
            legal.push(GeneratedMove {
                from,
                to: candidate.to,
                piece: kind,
                special: candidate.special,
            });
        }
    }
    legal
}

/// True as soon as one legal move is found for the side to move.
///
/// Ignores a recorded result so the status evaluator can ask before the
/// result is set.
pub fn has_any_legal_move(board: &Board, state: &GameState) -> bool {
    let open = GameState {
        result: None,
        ..state.clone()
    };
    board
        .pieces_of(state.side_to_move)
        .any(|(from, _)| !legal_moves_from(board, &open, from).is_empty())
}
