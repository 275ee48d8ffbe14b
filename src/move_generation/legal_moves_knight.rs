use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{mover_color, push_step_targets, Candidate};
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<Candidate>) {
    let Some(side) = mover_color(board, from) else {
        return;
    };
    push_step_targets(board, side, knight_targets(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn start_position_knight_has_two_jumps() {
        let board = Board::standard();
        let g1 = Square::new(6, 0).expect("g1");
        let mut out = Vec::new();
        generate_knight_moves(&board, g1, &mut out);
        let mut targets: Vec<String> = out.iter().map(|c| c.to.to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["f3", "h3"]);
    }
}
