use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[inline]
pub fn rook_rays(board: &Board, square: Square) -> Vec<Square> {
    ROOK_DIRECTIONS
        .iter()
        .flat_map(|(d_file, d_rank)| trace_ray(board, square, *d_file, *d_rank))
        .collect()
}
