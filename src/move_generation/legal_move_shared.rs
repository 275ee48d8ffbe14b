use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// One pseudo-legal or legal destination for a piece, with its special tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub to: Square,
    pub special: SpecialMove,
}

impl Candidate {
    #[inline]
    pub const fn normal(to: Square) -> Self {
        Self {
            to,
            special: SpecialMove::Normal,
        }
    }

    #[inline]
    pub const fn special(to: Square, special: SpecialMove) -> Self {
        Self { to, special }
    }
}

/// Pushes traced ray squares, stopping before own pieces and on enemy ones.
pub fn push_ray_targets(board: &Board, mover: Color, targets: Vec<Square>, out: &mut Vec<Candidate>) {
    for to in targets {
        match board.color_at(to) {
            Some(color) if color == mover => {}
            _ => out.push(Candidate::normal(to)),
        }
    }
}

/// Pushes step targets (knight, king) that do not hold an own piece.
pub fn push_step_targets(
    board: &Board,
    mover: Color,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Candidate>,
) {
    for to in targets {
        if board.color_at(to) != Some(mover) {
            out.push(Candidate::normal(to));
        }
    }
}

/// Color of the piece standing on `from`; generators need it to tell own
/// pieces from enemy ones.
#[inline]
pub fn mover_color(board: &Board, from: Square) -> Option<Color> {
    board.color_at(from)
}
