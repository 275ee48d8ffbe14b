//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting layout, draw thresholds and
//! the file geometry used by castling.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout from the a-file to the h-file, shared by both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without capture or pawn move that end the game.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Occurrences of one position that end the game.
pub const REPETITION_LIMIT: usize = 3;

pub const KING_HOME_FILE: u8 = 4;
pub const KING_SIDE_ROOK_FILE: u8 = 7;
pub const QUEEN_SIDE_ROOK_FILE: u8 = 0;

/// King destination and rook destination files for king-side castling.
pub const KING_SIDE_CASTLE_FILES: (u8, u8) = (6, 5);
/// King destination and rook destination files for queen-side castling.
pub const QUEEN_SIDE_CASTLE_FILES: (u8, u8) = (2, 3);
