//! King-safety filter over pseudo-legal candidates.
//!
//! Candidates are simulated on the board through [`BoardEdit`], a guard that
//! remembers every square it touches and puts them back when dropped. Early
//! returns and panics therefore cannot leak a simulated move into the next
//! candidate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::Candidate;

/// Scoped board mutation that restores every touched square on drop.
pub struct BoardEdit<'a> {
    board: &'a mut Board,
    saved: Vec<(Square, Option<Piece>)>,
}

impl<'a> BoardEdit<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            saved: Vec::with_capacity(3),
        }
    }

    /// Sets a square, remembering its original content the first time.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if !self.saved.iter().any(|(saved_sq, _)| *saved_sq == square) {
            self.saved.push((square, self.board.get(square)));
        }
        self.board.set(square, piece);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for BoardEdit<'_> {
    fn drop(&mut self) {
        for (square, piece) in self.saved.drain(..).rev() {
            self.board.set(square, piece);
        }
    }
}

/// Square of the pawn removed by an en-passant capture from `from` to `to`.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    Square::new(to.file(), from.rank())
}

/// Drops every candidate that would leave the mover's king attacked.
pub fn retain_king_safe(board: &mut Board, from: Square, candidates: &mut Vec<Candidate>) {
    let Some(moving) = board.get(from) else {
        candidates.clear();
        return;
    };
    let enemy = moving.color.opposite();
    let moving_king = moving.kind == PieceKind::King;
    let king_sq = board.king_square(moving.color);

    // Without a king there is nothing to protect.
    let Some(king_sq) = king_sq else {
        return;
    };

    let has_en_passant = candidates
        .iter()
        .any(|candidate| candidate.special == SpecialMove::EnPassantCapture);
    if !moving_king && !has_en_passant {
        let mut edit = BoardEdit::new(board);
        edit.set(from, None);
        if !is_square_attacked(edit.board(), king_sq, enemy) {
            return;
        }
    }

    candidates.retain(|candidate| {
        let mut edit = BoardEdit::new(board);
        edit.set(from, None);
        edit.set(candidate.to, Some(moving));
        if candidate.special == SpecialMove::EnPassantCapture {
            if let Some(victim) = en_passant_victim_square(from, candidate.to) {
                edit.set(victim, None);
            }
        }
        let guarded = if moving_king { candidate.to } else { king_sq };
        !is_square_attacked(edit.board(), guarded, enemy)
    });
}
