use crate::game_state::chess_types::*;

/// One fully legal move in the current position.
///
/// Promotions are listed once; the kind is chosen when the move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratedMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub special: SpecialMove,
}

impl GeneratedMove {
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.special == SpecialMove::Promotion
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.special.is_castle()
    }
}
