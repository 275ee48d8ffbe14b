//! Bishop ray geometry.
//!
//! Diagonal directions and the occupancy-aware ray walk shared by the
//! sliding generators. The walk stops on the first occupied square and
//! includes it; callers decide whether that square is a capture or a block.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Squares reached from `square` along one direction, up to and including
/// the first occupied square.
pub fn trace_ray(board: &Board, square: Square, d_file: i8, d_rank: i8) -> Vec<Square> {
    let mut out = Vec::with_capacity(7);
    let mut current = square;
    while let Some(next) = current.offset(d_file, d_rank) {
        out.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
    out
}

#[inline]
pub fn bishop_rays(board: &Board, square: Square) -> Vec<Square> {
    BISHOP_DIRECTIONS
        .iter()
        .flat_map(|(d_file, d_rank)| trace_ray(board, square, *d_file, *d_rank))
        .collect()
}
