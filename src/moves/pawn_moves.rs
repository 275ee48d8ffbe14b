use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_rank = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| square.offset(d_file, d_rank))
}

/// Squares from which a pawn of `color` would attack `square`.
#[inline]
pub fn pawn_attack_sources(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_rank = -color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| square.offset(d_file, d_rank))
}
