//! Linear history arena with a single cursor.
//!
//! Entry 0 is the position the game started from; every accepted move adds
//! one entry holding the text snapshot of the position reached, its
//! repetition key and the ply that produced it. Recording a move while the
//! cursor is behind the end discards the entries after the cursor first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::PlyRecord;

/// Identity of a position for repetition counting: placement, side to move,
/// castling rights and en-passant target. Clock and result are left out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepetitionKey {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
}

impl RepetitionKey {
    pub fn of(board: &Board, state: &GameState) -> Self {
        Self {
            board: board.clone(),
            side_to_move: state.side_to_move,
            castling_rights: state.castling_rights,
            en_passant_square: state.en_passant_square,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: String,
    pub key: RepetitionKey,
    /// `None` only for the starting entry.
    pub ply: Option<PlyRecord>,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    pub fn new(snapshot: String, key: RepetitionKey) -> Self {
        Self {
            entries: vec![HistoryEntry {
                snapshot,
                key,
                ply: None,
            }],
            cursor: 0,
        }
    }

    /// Plies recorded in total, including any ahead of the cursor.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// Plies played to reach the current entry.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn entry(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[inline]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Moves the cursor; `false` when `index` is past the last entry.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.cursor = index;
        true
    }

    /// How often `key` occurs among the entries up to and including the cursor.
    pub fn occurrences(&self, key: &RepetitionKey) -> usize {
        self.entries[..=self.cursor]
            .iter()
            .filter(|entry| entry.key == *key)
            .count()
    }

    /// Appends a position after the cursor, dropping any undone future.
    pub fn record(&mut self, snapshot: String, key: RepetitionKey, ply: PlyRecord) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            snapshot,
            key,
            ply: Some(ply),
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Plies from the start up to the cursor, oldest first.
    pub fn plies(&self) -> impl Iterator<Item = &PlyRecord> + '_ {
        self.entries[1..=self.cursor]
            .iter()
            .filter_map(|entry| entry.ply.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::SourceHint;

    fn dummy_ply(to_index: u8) -> PlyRecord {
        PlyRecord {
            mover: Color::White,
            piece: PieceKind::Knight,
            from: Square::from_index(6).expect("g1"),
            to: Square::from_index(to_index).expect("target"),
            capture: false,
            promotion: None,
            check: None,
            special: SpecialMove::Normal,
            source_hint: SourceHint::NONE,
        }
    }

    fn start_key() -> RepetitionKey {
        RepetitionKey::of(&Board::standard(), &GameState::new_game())
    }

    #[test]
    fn key_ignores_clock_and_result() {
        let board = Board::standard();
        let later = GameState {
            halfmove_clock: 40,
            result: Some(GameResult::Stalemate),
            ..GameState::new_game()
        };
        assert_eq!(RepetitionKey::of(&board, &later), start_key());

        let black_to_move = GameState {
            side_to_move: Color::Black,
            ..GameState::new_game()
        };
        assert_ne!(RepetitionKey::of(&board, &black_to_move), start_key());
    }

    #[test]
    fn record_after_rewind_truncates_the_future() {
        let mut history = History::new("start".to_owned(), start_key());
        history.record("one".to_owned(), start_key(), dummy_ply(21));
        history.record("two".to_owned(), start_key(), dummy_ply(23));
        assert_eq!(history.ply_count(), 2);
        assert_eq!(history.occurrences(&start_key()), 3);

        assert!(history.set_cursor(1));
        assert_eq!(history.plies().count(), 1);
        assert_eq!(history.occurrences(&start_key()), 2);

        history.record("three".to_owned(), start_key(), dummy_ply(23));
        assert_eq!(history.ply_count(), 2);
        assert_eq!(history.current().snapshot, "three");
        assert!(!history.set_cursor(3));
    }
}
