use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_rays, BISHOP_DIRECTIONS};
use crate::moves::rook_moves::{rook_rays, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn queen_rays(board: &Board, square: Square) -> Vec<Square> {
    let mut out = rook_rays(board, square);
    out.extend(bishop_rays(board, square));
    out
}

#[cfg(test)]
mod tests {
    use super::{queen_rays, QUEEN_DIRECTIONS};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = Square::from_index(27).expect("d4");
        assert_eq!(queen_rays(&Board::empty(), d4).len(), 27);
        assert_eq!(QUEEN_DIRECTIONS.len(), 8);
    }

    #[test]
    fn queen_rays_stop_at_blockers() {
        let d4 = Square::from_index(27).expect("d4");
        let d6 = Square::from_index(43).expect("d6");
        let d7 = Square::from_index(51).expect("d7");
        let g7 = Square::from_index(54).expect("g7");
        let h8 = Square::from_index(63).expect("h8");
        let mut board = Board::empty();
        board.set(d6, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        board.set(g7, Some(Piece::new(Color::White, PieceKind::Pawn)));

        let rays = queen_rays(&board, d4);
        assert!(rays.contains(&d6));
        assert!(rays.contains(&g7));
        assert!(!rays.contains(&d7));
        assert!(!rays.contains(&h8));
    }
}
