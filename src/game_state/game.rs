//! The game facade.
//!
//! `Game` owns the authoritative board, the game state and the history
//! arena. Every move goes through [`Game::make_move`]: the executor applies
//! it, the side to move is swapped, the status of the new position is
//! evaluated and the resulting snapshot is recorded. Navigation through the
//! history reloads board and state from the stored snapshots.

use tracing::{debug, info, trace};

use crate::chess_errors::{MoveError, SnapshotError};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVE_LIMIT, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::history::{History, RepetitionKey};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_any_legal_move, legal_moves_from,
};
use crate::move_generation::move_generator::GeneratedMove;
use crate::moves::move_descriptions::PlyRecord;
use crate::utils::fen_generator::generate_fen;
use crate::utils::notation::{format_ply, parse_move_text, NotationStyle};
use crate::utils::snapshot::{decode_snapshot, encode_snapshot};

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    history: History,
    first_mover: Color,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), GameState::new_game())
    }

    /// Starts a game from an arbitrary position. The position is not
    /// validated.
    pub fn from_position(board: Board, state: GameState) -> Self {
        let history = History::new(encode_snapshot(&board, &state), RepetitionKey::of(&board, &state));
        let first_mover = state.side_to_move;
        Self {
            board,
            state,
            history,
            first_mover,
        }
    }

    /// Starts a game from a text snapshot (see [`crate::utils::snapshot`]).
    pub fn from_snapshot(snapshot: &str) -> Result<Self, SnapshotError> {
        let (board, state) = decode_snapshot(snapshot)?;
        Ok(Self::from_position(board, state))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_king_in_check(&self.board, self.state.side_to_move)
    }

    /// Legal destinations of the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        legal_moves_from(&self.board, &self.state, from)
            .into_iter()
            .map(|candidate| candidate.to)
            .collect()
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<GeneratedMove> {
        generate_legal_moves(&self.board, &self.state)
    }

    /// Plays `from -> to` given as raw `(file, rank)` coordinates.
    ///
    /// `promotion` is required when a pawn reaches the last rank and ignored
    /// otherwise. On error the game is left exactly as it was.
    pub fn make_move(
        &mut self,
        from: (i8, i8),
        to: (i8, i8),
        promotion: Option<PieceKind>,
    ) -> Result<PlyRecord, MoveError> {
        let ply = match apply_move(&mut self.board, &mut self.state, from, to, promotion) {
            Ok(ply) => ply,
            Err(error) => {
                debug!(?from, ?to, code = error.code(), %error, "move rejected");
                return Err(error);
            }
        };
        let ply = self.finish_ply(ply);
        debug!(
            ply = self.history.cursor(),
            mv = %format_ply(&ply, NotationStyle::Long),
            "move applied"
        );
        if let Some(result) = self.state.result {
            info!(%result, code = result.code(), plies = self.history.cursor(), "game over");
        }
        Ok(ply)
    }

    #[inline]
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<PlyRecord, MoveError> {
        self.make_move(from.coords(), to.coords(), promotion)
    }

    /// Resolves and plays move text in any supported notation style.
    pub fn play_text(&mut self, text: &str) -> Result<PlyRecord, MoveError> {
        let (from, to, promotion) = self.resolve_move_text(text)?;
        self.play(from, to, promotion)
    }

    /// Turns move text into `(from, to, promotion)` for the side to move.
    pub fn resolve_move_text(
        &self,
        text: &str,
    ) -> Result<(Square, Square, Option<PieceKind>), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameIsOver);
        }
        let side = self.state.side_to_move;
        let hint = parse_move_text(text, side)?;

        if hint.piece.is_none() {
            if let Some(from) = hint.source() {
                return Ok((from, hint.to, hint.promotion));
            }
        }

        let kind = hint.piece.unwrap_or(PieceKind::Pawn);
        let sources: Vec<Square> = self
            .board
            .pieces_of(side)
            .filter(|&(square, piece)| {
                piece == kind
                    && hint.from_file.map_or(true, |file| square.file() == file)
                    && hint.from_rank.map_or(true, |rank| square.rank() == rank)
            })
            .map(|(square, _)| square)
            .filter(|&square| self.legal_moves_from(square).contains(&hint.to))
            .collect();

        match sources.as_slice() {
            [] => Err(MoveError::InvalidMove),
            [from] => Ok((*from, hint.to, hint.promotion)),
            _ => Err(MoveError::AmbiguousMove),
        }
    }

    /// Swaps the side to move, annotates the ply, decides the result and
    /// records the new position.
    fn finish_ply(&mut self, mut ply: PlyRecord) -> PlyRecord {
        let mover = self.state.side_to_move;
        self.state.side_to_move = mover.opposite();

        let in_check = is_king_in_check(&self.board, self.state.side_to_move);
        if in_check {
            ply.check = Some(CheckMark::Check);
        }

        let key = RepetitionKey::of(&self.board, &self.state);
        self.state.result = if !has_any_legal_move(&self.board, &self.state) {
            if in_check {
                ply.check = Some(CheckMark::Checkmate);
                Some(GameResult::win_for(mover))
            } else {
                Some(GameResult::Stalemate)
            }
        } else if self.state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
            Some(GameResult::FiftyMoveLimit)
        } else if self.history.occurrences(&key) + 1 >= REPETITION_LIMIT {
            Some(GameResult::ThreefoldRepetition)
        } else {
            None
        };

        let snapshot = encode_snapshot(&self.board, &self.state);
        self.history.record(snapshot, key, ply);
        ply
    }

    /// Steps back one ply. `Ok(false)` at the start of the game.
    pub fn undo(&mut self) -> Result<bool, SnapshotError> {
        match self.history.cursor().checked_sub(1) {
            Some(index) => self.load_entry(index),
            None => Ok(false),
        }
    }

    /// Steps forward one ply. `Ok(false)` at the end of the history.
    pub fn redo(&mut self) -> Result<bool, SnapshotError> {
        self.load_entry(self.history.cursor() + 1)
    }

    /// Jumps to the position after `ply` plies. `Ok(false)` when out of range.
    pub fn goto_ply(&mut self, ply: usize) -> Result<bool, SnapshotError> {
        self.load_entry(ply)
    }

    pub fn goto_first(&mut self) -> Result<bool, SnapshotError> {
        self.load_entry(0)
    }

    pub fn goto_last(&mut self) -> Result<bool, SnapshotError> {
        self.load_entry(self.history.ply_count())
    }

    fn load_entry(&mut self, index: usize) -> Result<bool, SnapshotError> {
        let Some(entry) = self.history.entry(index) else {
            return Ok(false);
        };
        let (board, state) = decode_snapshot(&entry.snapshot)?;
        self.board = board;
        self.state = state;
        self.history.set_cursor(index);
        trace!(ply = index, of = self.history.ply_count(), "history cursor moved");
        Ok(true)
    }

    /// Plies recorded, including any ahead of the cursor after an undo.
    #[inline]
    pub fn ply_count(&self) -> usize {
        self.history.ply_count()
    }

    /// Plies played to reach the current position.
    #[inline]
    pub fn current_ply(&self) -> usize {
        self.history.cursor()
    }

    /// Plies from the start up to the current position.
    pub fn plies(&self) -> impl Iterator<Item = &PlyRecord> + '_ {
        self.history.plies()
    }

    /// Ply that produced the current position.
    pub fn last_move(&self) -> Option<&PlyRecord> {
        self.history.current().ply.as_ref()
    }

    pub fn last_move_type(&self) -> Option<SpecialMove> {
        self.last_move().map(|ply| ply.special)
    }

    /// Notation of every ply up to the current position.
    pub fn move_list(&self, style: NotationStyle) -> Vec<String> {
        self.plies().map(|ply| format_ply(ply, style)).collect()
    }

    /// Text snapshot of the current position.
    pub fn snapshot(&self) -> String {
        self.history.current().snapshot.clone()
    }

    /// Board and state the game started from.
    pub fn starting_position(&self) -> Result<(Board, GameState), SnapshotError> {
        match self.history.entry(0) {
            Some(entry) => decode_snapshot(&entry.snapshot),
            None => Ok((Board::standard(), GameState::new_game())),
        }
    }

    /// Full-move number in FEN terms, counting from the game's start.
    pub fn fullmove_number(&self) -> u32 {
        let offset = usize::from(self.first_mover == Color::Black);
        let completed = (self.history.cursor() + offset) / 2;
        u32::try_from(completed).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    pub fn fen(&self) -> String {
        generate_fen(&self.board, &self.state, self.fullmove_number())
    }
}
