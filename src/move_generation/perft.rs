//! Perft node counting over the legal move generator.
//!
//! Walks the move tree to a fixed depth and tallies leaf statistics. Each
//! promotion choice counts as its own node. The reference positions below are
//! the usual perft suite expressed as text snapshots.

use crate::chess_errors::{MoveError, SnapshotError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_any_legal_move};
use crate::move_generation::move_generator::GeneratedMove;
use crate::utils::snapshot::decode_snapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// A reference position with its known node counts for depth 1, 2, ...
#[derive(Debug, Clone, Copy)]
pub struct PerftCase {
    pub name: &'static str,
    pub snapshot: &'static str,
    pub expected_nodes: &'static [u64],
}

impl PerftCase {
    pub fn position(&self) -> Result<(Board, GameState), SnapshotError> {
        decode_snapshot(self.snapshot)
    }
}

pub const PERFT_CASES: &[PerftCase] = &[
    PerftCase {
        name: "start",
        snapshot: concat!(
            "rnbqkbnr",
            "pppppppp",
            "        ",
            "        ",
            "        ",
            "        ",
            "PPPPPPPP",
            "RNBQKBNR",
            "w1111--00:0",
        ),
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    PerftCase {
        name: "kiwipete",
        snapshot: concat!(
            "r   k  r",
            "p ppqpb ",
            "bn  pnp ",
            "   PN   ",
            " p  P   ",
            "  N  Q p",
            "PPPBBPPP",
            "R   K  R",
            "w1111--00:0",
        ),
        expected_nodes: &[48, 2039, 97_862],
    },
    PerftCase {
        name: "rook_endgame",
        snapshot: concat!(
            "        ",
            "  p     ",
            "   p    ",
            "KP     r",
            " R   p k",
            "        ",
            "    P P ",
            "        ",
            "w0000--00:0",
        ),
        expected_nodes: &[14, 191, 2812, 43_238],
    },
    PerftCase {
        name: "promotions",
        snapshot: concat!(
            "r  q rk ",
            "pP p  pp",
            "Q    n  ",
            "bbp p   ",
            "Np      ",
            " B   NBn",
            "pPPP PPP",
            "R   K  R",
            "b1100--00:0",
        ),
        expected_nodes: &[6, 264, 9467],
    },
    PerftCase {
        name: "discovered_checks",
        snapshot: concat!(
            "rnbq k r",
            "pp Pbppp",
            "  p     ",
            "        ",
            "  B     ",
            "        ",
            "PPP NnPP",
            "RNBQK  R",
            "w1100--00:1",
        ),
        expected_nodes: &[44, 1486, 62_379],
    },
    PerftCase {
        name: "symmetric_middlegame",
        snapshot: concat!(
            "r    rk ",
            " pp qppp",
            "p np n  ",
            "  b p B ",
            "  B P b ",
            "P NP N  ",
            " PP QPPP",
            "R    RK ",
            "w0000--00:0",
        ),
        expected_nodes: &[46, 2079, 89_890],
    },
];

pub fn perft(board: &Board, state: &GameState, depth: u8) -> Result<PerftCounts, MoveError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(board, state) {
        for promotion in promotion_choices(&mv) {
            let mut next_board = board.clone();
            let mut next_state = state.clone();
            let ply = apply_move(
                &mut next_board,
                &mut next_state,
                mv.from.coords(),
                mv.to.coords(),
                promotion,
            )?;
            next_state.side_to_move = next_state.side_to_move.opposite();

            if depth > 1 {
                total.merge(perft(&next_board, &next_state, depth - 1)?);
                continue;
            }

            total.nodes += 1;
            if ply.capture {
                total.captures += 1;
            }
            if ply.special == SpecialMove::EnPassantCapture {
                total.en_passant += 1;
            }
            if ply.special.is_castle() {
                total.castles += 1;
            }
            if ply.promotion.is_some() {
                total.promotions += 1;
            }
            if is_king_in_check(&next_board, next_state.side_to_move) {
                total.checks += 1;
                if !has_any_legal_move(&next_board, &next_state) {
                    total.checkmates += 1;
                }
            }
        }
    }

    Ok(total)
}

/// Node counts for each move at the root, in generation order.
pub fn perft_divide(
    board: &Board,
    state: &GameState,
    depth: u8,
) -> Result<Vec<(GeneratedMove, Option<PieceKind>, u64)>, MoveError> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in generate_legal_moves(board, state) {
        for promotion in promotion_choices(&mv) {
            let mut next_board = board.clone();
            let mut next_state = state.clone();
            apply_move(
                &mut next_board,
                &mut next_state,
                mv.from.coords(),
                mv.to.coords(),
                promotion,
            )?;
            next_state.side_to_move = next_state.side_to_move.opposite();
            let nodes = perft(&next_board, &next_state, depth - 1)?.nodes;
            out.push((mv, promotion, nodes));
        }
    }
    Ok(out)
}

fn promotion_choices(mv: &GeneratedMove) -> Vec<Option<PieceKind>> {
    if mv.is_promotion() {
        PROMOTION_KINDS.iter().copied().map(Some).collect()
    } else {
        vec![None]
    }
}
