//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes, diagonal captures and en-passant captures. Any
//! destination on the last rank is tagged as a promotion; the promotion kind
//! itself is chosen when the move is applied.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{mover_color, Candidate};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(board: &Board, state: &GameState, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    let direction = side.pawn_direction();
    let tag = |to: Square, special: SpecialMove| {
        if to.rank() == side.promotion_rank() {
            Candidate::special(to, SpecialMove::Promotion)
        } else {
            Candidate::special(to, special)
        }
    };

    if let Some(one_step) = from.offset(0, direction) {
        if board.is_empty(one_step) {
            out.push(tag(one_step, SpecialMove::Normal));

            if from.rank() == side.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(0, direction) {
                    if board.is_empty(two_step) {
                        out.push(Candidate::special(two_step, SpecialMove::DoublePush));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if board.color_at(to) == Some(side.opposite()) {
            out.push(tag(to, SpecialMove::Normal));
        }
    }

    if from.rank() == side.en_passant_capture_rank() {
        if let Some(target) = state.en_passant_square {
            if pawn_attacks(side, from).any(|to| to == target) && board.is_empty(target) {
                out.push(Candidate::special(target, SpecialMove::EnPassantCapture));
            }
        }
    }
}
