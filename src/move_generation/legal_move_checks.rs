//! Attack detection.
//!
//! Answers "does this side attack that square?" by walking outward from the
//! target: pawn geometry first, then knight jumps, then the eight rays.
//! Read-only, so it is safe on a board that is mid-simulation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether `color`'s king is attacked. A missing king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let attacker_pawn = Some(Piece::new(attacker_color, PieceKind::Pawn));
    if pawn_attack_sources(attacker_color, square).any(|from| board.get(from) == attacker_pawn) {
        return true;
    }

    let attacker_knight = Some(Piece::new(attacker_color, PieceKind::Knight));
    if knight_targets(square).any(|from| board.get(from) == attacker_knight) {
        return true;
    }

    QUEEN_DIRECTIONS
        .iter()
        .any(|(d_file, d_rank)| ray_threatens(board, square, *d_file, *d_rank, attacker_color))
}

/// The first piece met along the ray decides.
fn ray_threatens(board: &Board, square: Square, d_file: i8, d_rank: i8, attacker: Color) -> bool {
    let diagonal = d_file != 0 && d_rank != 0;
    let mut steps = 0u8;
    let mut current = square;

    while let Some(next) = current.offset(d_file, d_rank) {
        steps += 1;
        current = next;

        let Some(piece) = board.get(next) else {
            continue;
        };
        if piece.color != attacker {
            return false;
        }
        return match piece.kind {
            PieceKind::King => steps == 1,
            PieceKind::Queen => true,
            PieceKind::Rook => !diagonal,
            PieceKind::Bishop => diagonal,
            PieceKind::Pawn | PieceKind::Knight => false,
        };
    }

    false
}
