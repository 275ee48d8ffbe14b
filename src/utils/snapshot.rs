//! Compact text snapshot of a position, used by the history arena.
//!
//! Layout: 64 board characters from a8 to h1 (rank 8 first, files a to h,
//! space for empty, uppercase for white), the side to move (`w`/`b`), four
//! castling digits in the order WK WQ BK BQ, the en-passant target as file and
//! rank digits or `--`, a two-digit result code (`00` while in progress), a
//! `:` and the decimal halfmove clock.
//!
//! ```text
//! rnbqkbnrpppppppp                                PPPPPPPPRNBQKBNRw1111--00:0
//! ```

use crate::chess_errors::SnapshotError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

const BOARD_CHARS: usize = 64;
const HEADER_CHARS: usize = BOARD_CHARS + 1 + 4 + 2 + 2;

pub fn encode_snapshot(board: &Board, state: &GameState) -> String {
    let mut out = String::with_capacity(HEADER_CHARS + 4);

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let piece = Square::new(file, rank).and_then(|sq| board.get(sq));
            out.push(piece.map_or(' ', Piece::to_char));
        }
    }

    out.push(state.side_to_move.to_char());

    let rights = state.castling_rights;
    for flag in [
        rights.white_king_side,
        rights.white_queen_side,
        rights.black_king_side,
        rights.black_queen_side,
    ] {
        out.push(if flag { '1' } else { '0' });
    }

    match state.en_passant_square {
        Some(square) => {
            out.push(char::from(b'0' + square.file()));
            out.push(char::from(b'0' + square.rank()));
        }
        None => out.push_str("--"),
    }

    let code = state.result.map_or(0, GameResult::code);
    out.push_str(&format!("{code:02}"));
    out.push(':');
    out.push_str(&state.halfmove_clock.to_string());

    out
}

pub fn decode_snapshot(text: &str) -> Result<(Board, GameState), SnapshotError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < HEADER_CHARS + 2 {
        return Err(SnapshotError::TooShort(chars.len()));
    }

    let mut board = Board::empty();
    for (index, &ch) in chars[..BOARD_CHARS].iter().enumerate() {
        if ch == ' ' {
            continue;
        }
        let piece = Piece::from_char(ch).ok_or(SnapshotError::InvalidPiece { index, ch })?;
        let rank = 7 - (index / 8) as u8;
        let file = (index % 8) as u8;
        let square = Square::new(file, rank).ok_or(SnapshotError::InvalidPiece { index, ch })?;
        board.set(square, Some(piece));
    }

    let mut cursor = BOARD_CHARS;
    let side_char = chars[cursor];
    let side_to_move = Color::from_char(side_char).ok_or(SnapshotError::InvalidColor(side_char))?;
    cursor += 1;

    let mut flags = [false; 4];
    for flag in flags.iter_mut() {
        *flag = match chars[cursor] {
            '1' => true,
            '0' => false,
            other => return Err(SnapshotError::InvalidCastlingFlag(other)),
        };
        cursor += 1;
    }
    let castling_rights = CastlingRights {
        white_king_side: flags[0],
        white_queen_side: flags[1],
        black_king_side: flags[2],
        black_queen_side: flags[3],
    };

    let ep_field: String = chars[cursor..cursor + 2].iter().collect();
    let en_passant_square = if ep_field == "--" {
        None
    } else {
        let digit = |ch: char| ch.to_digit(10).and_then(|d| u8::try_from(d).ok());
        match (digit(chars[cursor]), digit(chars[cursor + 1])) {
            (Some(file), Some(rank)) => Some(
                Square::new(file, rank).ok_or_else(|| SnapshotError::InvalidEnPassant(ep_field.clone()))?,
            ),
            _ => return Err(SnapshotError::InvalidEnPassant(ep_field)),
        }
    };
    cursor += 2;

    let result_field: String = chars[cursor..cursor + 2].iter().collect();
    let code: u8 = result_field
        .parse()
        .map_err(|_| SnapshotError::InvalidResult(result_field.clone()))?;
    let result = match code {
        0 => None,
        code => Some(GameResult::from_code(code).ok_or(SnapshotError::InvalidResult(result_field))?),
    };
    cursor += 2;

    if chars[cursor] != ':' {
        return Err(SnapshotError::MissingClockSeparator);
    }
    let clock_field: String = chars[cursor + 1..].iter().collect();
    let halfmove_clock: u16 = clock_field
        .parse()
        .map_err(|_| SnapshotError::InvalidClock(clock_field.clone()))?;

    Ok((
        board,
        GameState {
            side_to_move,
            castling_rights,
            en_passant_square,
            halfmove_clock,
            result,
        },
    ))
}
