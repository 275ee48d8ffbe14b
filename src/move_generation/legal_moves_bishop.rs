use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{mover_color, push_ray_targets, Candidate};
use crate::moves::bishop_moves::bishop_rays;

/// Pseudo-legal bishop destinations from `from`.
pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    push_ray_targets(board, side, bishop_rays(board, from), out);
}
