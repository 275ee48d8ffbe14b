//! The 8x8 board.
//!
//! Holds piece placement only. Turn, rights and clocks live in
//! [`GameState`](crate::game_state::game_state::GameState).

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

/// Square-centric board: `squares[rank][file]`, rank 0 is white's home rank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(Color::White, *kind));
            board.squares[1][file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[6][file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[7][file] = Some(Piece::new(Color::Black, *kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Removes and returns whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|sq| self.get(*sq) == Some(king))
    }

    /// Every occupied square with its piece, a1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color, a1 first.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        self.occupied()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(sq, piece)| (sq, piece.kind))
    }
}
