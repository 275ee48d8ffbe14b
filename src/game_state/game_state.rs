//! Turn, rights and clock state that travels with the board.
//!
//! `GameState` is everything about a position that is not piece placement:
//! the side to move, castling rights, the en-passant target, the halfmove
//! clock and the terminal result once the game has ended.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the last double pawn push; valid for one ply.
    pub en_passant_square: Option<Square>,
    /// Half-moves since the last capture or pawn move.
    pub halfmove_clock: u16,
    pub result: Option<GameResult>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_square: None,
            halfmove_clock: 0,
            result: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}
