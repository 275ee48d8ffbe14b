//! Seeded random playouts.
//!
//! Plays uniformly random legal moves for both sides until the game ends or
//! a ply cap is reached. Used by the binary, the property tests and the
//! history bench to produce realistic, reproducible games.

use rand::seq::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::*;
use crate::game_state::game::Game;
use crate::moves::move_descriptions::PlyRecord;
use crate::utils::notation::{format_ply, NotationStyle};

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
    /// Promotion kind to pick; `None` picks one at random.
    pub promotion: Option<PieceKind>,
    pub verbose: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 0x5eed,
            promotion: Some(PieceKind::Queen),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub game: Game,
    pub plies: Vec<PlyRecord>,
    pub result: Option<GameResult>,
}

pub fn play_random_game(config: &PlayoutConfig) -> Result<PlayoutReport, MoveError> {
    play_random_game_from(Game::new(), config)
}

/// Continues `game` with random moves.
pub fn play_random_game_from(mut game: Game, config: &PlayoutConfig) -> Result<PlayoutReport, MoveError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut plies = Vec::new();

    while !game.is_over() && plies.len() < config.max_plies {
        let moves = game.legal_moves();
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        let promotion = if mv.is_promotion() {
            config
                .promotion
                .or_else(|| PROMOTION_KINDS.choose(&mut rng).copied())
        } else {
            None
        };

        let ply = game.play(mv.from, mv.to, promotion)?;
        if config.verbose {
            info!(ply = plies.len() + 1, mv = %format_ply(&ply, NotationStyle::Short), "random move");
        }
        plies.push(ply);
    }

    debug!(
        seed = config.seed,
        plies = plies.len(),
        result = ?game.result(),
        "playout finished"
    );
    let result = game.result();
    Ok(PlayoutReport {
        game,
        plies,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::{play_random_game, PlayoutConfig};

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = PlayoutConfig {
            max_plies: 60,
            seed: 7,
            ..PlayoutConfig::default()
        };
        let first = play_random_game(&config).expect("playout should run");
        let second = play_random_game(&config).expect("playout should run");
        assert_eq!(first.plies, second.plies);
        assert_eq!(first.game.snapshot(), second.game.snapshot());
    }

    #[test]
    fn playout_respects_the_ply_cap() {
        let config = PlayoutConfig {
            max_plies: 10,
            ..PlayoutConfig::default()
        };
        let report = play_random_game(&config).expect("playout should run");
        assert!(report.plies.len() <= 10);
        assert_eq!(report.game.current_ply(), report.plies.len());
        if report.result.is_none() {
            assert_eq!(report.plies.len(), 10);
        }
    }
}
