use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KING_HOME_FILE, KING_SIDE_CASTLE_FILES, KING_SIDE_ROOK_FILE, QUEEN_SIDE_CASTLE_FILES,
    QUEEN_SIDE_ROOK_FILE,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{mover_color, push_step_targets, Candidate};
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(board: &Board, state: &GameState, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    push_step_targets(board, side, king_targets(from), out);
    generate_castling_moves(board, state, side, from, out);
}

fn generate_castling_moves(
    board: &Board,
    state: &GameState,
    side: Color,
    king_from: Square,
    out: &mut Vec<Candidate>,
) {
    let home = side.home_rank();
    if king_from.file() != KING_HOME_FILE || king_from.rank() != home {
        return;
    }
    let enemy = side.opposite();

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, enemy) {
        return;
    }

    if state.castling_rights.king_side(side) {
        if let Some(to) = castle_target(board, side, KING_SIDE_ROOK_FILE, KING_SIDE_CASTLE_FILES.0) {
            out.push(Candidate::special(to, SpecialMove::KingSideCastle));
        }
    }
    if state.castling_rights.queen_side(side) {
        if let Some(to) = castle_target(board, side, QUEEN_SIDE_ROOK_FILE, QUEEN_SIDE_CASTLE_FILES.0) {
            out.push(Candidate::special(to, SpecialMove::QueenSideCastle));
        }
    }
}

/// King destination for castling toward `rook_file`, if the path allows it.
///
/// Every square between king and rook must be empty; the squares the king
/// crosses and lands on must not be attacked.
fn castle_target(board: &Board, side: Color, rook_file: u8, king_to_file: u8) -> Option<Square> {
    let home = side.home_rank();
    let rook_square = Square::new(rook_file, home)?;
    if board.get(rook_square) != Some(Piece::new(side, PieceKind::Rook)) {
        return None;
    }

    let (low, high) = if rook_file < KING_HOME_FILE {
        (rook_file + 1, KING_HOME_FILE)
    } else {
        (KING_HOME_FILE + 1, rook_file)
    };
    for file in low..high {
        if !board.is_empty(Square::new(file, home)?) {
            return None;
        }
    }

    let (pass_low, pass_high) = if king_to_file < KING_HOME_FILE {
        (king_to_file, KING_HOME_FILE)
    } else {
        (KING_HOME_FILE + 1, king_to_file + 1)
    };
    for file in pass_low..pass_high {
        if is_square_attacked(board, Square::new(file, home)?, side.opposite()) {
            return None;
        }
    }

    Square::new(king_to_file, home)
}
