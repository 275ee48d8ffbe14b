use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{mover_color, push_ray_targets, Candidate};
use crate::moves::queen_moves::queen_rays;

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    push_ray_targets(board, side, queen_rays(board, from), out);
}
