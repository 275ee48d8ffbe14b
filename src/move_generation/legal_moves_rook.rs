//! Pseudo-legal rook move generation.
//!
//! Emits rook destinations along the four orthogonal rays, including the
//! capture square that ends a ray. King safety is left to the filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{mover_color, push_ray_targets, Candidate};
use crate::moves::rook_moves::rook_rays;

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    push_ray_targets(board, side, rook_rays(board, from), out);
}
