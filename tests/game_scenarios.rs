use std::collections::HashSet;

use chessboard::chess_errors::MoveError;
use chessboard::game_state::board::Board;
use chessboard::game_state::chess_types::*;
use chessboard::game_state::game::Game;
use chessboard::game_state::game_state::GameState;
use chessboard::move_generation::legal_move_checks::is_king_in_check;
use chessboard::utils::algebraic::algebraic_to_square;
use chessboard::utils::notation::{format_ply, NotationStyle};
use chessboard::utils::self_play::{play_random_game, PlayoutConfig};

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("test square should parse")
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.play_text(text)
            .unwrap_or_else(|error| panic!("scripted move {text} failed: {error}"));
    }
}

fn position(pieces: &[(&str, Color, PieceKind)], side_to_move: Color, halfmove_clock: u16) -> Game {
    let mut board = Board::empty();
    for (name, color, kind) in pieces {
        board.set(sq(name), Some(Piece::new(*color, *kind)));
    }
    let state = GameState {
        side_to_move,
        castling_rights: CastlingRights::NONE,
        en_passant_square: None,
        halfmove_clock,
        result: None,
    };
    Game::from_position(board, state)
}

fn playout_configs() -> impl Iterator<Item = PlayoutConfig> {
    (1..=6u64).map(|seed| PlayoutConfig {
        max_plies: 120,
        seed,
        promotion: None,
        verbose: false,
    })
}

#[test]
fn double_push_sets_en_passant_target_for_one_ply() {
    let mut game = Game::new();
    let ply = game
        .make_move((4, 1), (4, 3), None)
        .expect("e2e4 should be legal");
    assert_eq!(ply.special, SpecialMove::DoublePush);
    assert_eq!(game.state().en_passant_square, Some(sq("e3")));
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.snapshot().contains("b111142"));

    play_all(&mut game, &["Nf6"]);
    assert_eq!(game.state().en_passant_square, None);
}

#[test]
fn en_passant_capture_is_available_only_immediately() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "a6", "e5", "d5"]);
    assert!(game.legal_moves_from(sq("e5")).contains(&sq("d6")));

    let mut taken = game.clone();
    let ply = taken.play_text("exd6").expect("en passant should be legal");
    assert_eq!(ply.special, SpecialMove::EnPassantCapture);
    assert!(ply.capture);
    assert_eq!(taken.board().get(sq("d5")), None);
    assert_eq!(
        taken.board().get(sq("d6")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(taken.state().halfmove_clock, 0);

    play_all(&mut game, &["Nf3", "a5"]);
    assert!(!game.legal_moves_from(sq("e5")).contains(&sq("d6")));
    assert_eq!(game.play_text("exd6"), Err(MoveError::InvalidMove));
}

#[test]
fn en_passant_that_exposes_the_king_along_the_rank_is_illegal() {
    let mut game = position(
        &[
            ("a5", Color::White, PieceKind::King),
            ("b5", Color::White, PieceKind::Pawn),
            ("h5", Color::Black, PieceKind::Rook),
            ("c7", Color::Black, PieceKind::Pawn),
            ("h8", Color::Black, PieceKind::King),
        ],
        Color::Black,
        0,
    );
    play_all(&mut game, &["c5"]);
    assert_eq!(game.state().en_passant_square, Some(sq("c6")));
    assert_eq!(game.legal_moves_from(sq("b5")), vec![sq("b6")]);
}

#[test]
fn king_side_castling_moves_the_rook_and_clears_both_rights() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]);
    let ply = game.play_text("O-O").expect("castling should be legal");

    assert_eq!(ply.special, SpecialMove::KingSideCastle);
    assert_eq!(game.last_move_type(), Some(SpecialMove::KingSideCastle));
    assert_eq!(
        game.board().get(sq("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        game.board().get(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(game.board().get(sq("h1")), None);

    let rights = game.state().castling_rights;
    assert!(!rights.white_king_side && !rights.white_queen_side);
    assert!(rights.black_king_side && rights.black_queen_side);
    assert_eq!(game.move_list(NotationStyle::Short).last().map(String::as_str), Some("O-O"));
}

#[test]
fn fools_mate_ends_the_game_for_black() {
    let mut game = Game::new();
    play_all(&mut game, &["f3", "e5", "g4"]);
    let ply = game.play_text("Qh4").expect("Qh4 should be legal");

    assert!(ply.is_checkmate());
    assert_eq!(game.result(), Some(GameResult::BlackWins));
    assert_eq!(game.result().map(GameResult::code), Some(9));
    assert!(game.is_check());
    assert!(game.legal_moves().is_empty());
    assert_eq!(
        game.move_list(NotationStyle::Short),
        vec!["f3", "e5", "g4", "Qh4#"]
    );
    assert_eq!(
        game.make_move((4, 1), (4, 2), None),
        Err(MoveError::GameIsOver)
    );
    assert_eq!(MoveError::GameIsOver.code(), 6);
}

#[test]
fn stalemate_is_a_draw_without_check() {
    let mut game = position(
        &[
            ("a8", Color::Black, PieceKind::King),
            ("c7", Color::White, PieceKind::Queen),
            ("h1", Color::White, PieceKind::King),
        ],
        Color::White,
        0,
    );
    let ply = game.play_text("Qb6").expect("Qb6 should be legal");
    assert_eq!(ply.check, None);
    assert_eq!(game.result(), Some(GameResult::Stalemate));
    assert_eq!(GameResult::Stalemate.name(), "STALEMATE");
}

#[test]
fn threefold_repetition_triggers_on_the_third_occurrence() {
    let mut game = position(
        &[
            ("e1", Color::White, PieceKind::King),
            ("e8", Color::Black, PieceKind::King),
        ],
        Color::White,
        0,
    );
    play_all(&mut game, &["Ke2", "Ke7", "Ke1", "Ke8", "Ke2", "Ke7", "Ke1"]);
    assert_eq!(game.result(), None);

    play_all(&mut game, &["Ke8"]);
    assert_eq!(game.current_ply(), 8);
    assert_eq!(game.result(), Some(GameResult::ThreefoldRepetition));
    assert_eq!(game.result().map(GameResult::code), Some(12));

    game.undo().expect("undo should decode");
    assert_eq!(game.result(), None);
}

#[test]
fn fifty_move_rule_from_a_preset_clock() {
    let mut game = position(
        &[
            ("e1", Color::White, PieceKind::King),
            ("b1", Color::White, PieceKind::Knight),
            ("e8", Color::Black, PieceKind::King),
            ("b8", Color::Black, PieceKind::Knight),
        ],
        Color::White,
        97,
    );
    play_all(&mut game, &["Nc3", "Nc6"]);
    assert_eq!(game.state().halfmove_clock, 99);
    assert_eq!(game.result(), None);

    play_all(&mut game, &["Nb1"]);
    assert_eq!(game.state().halfmove_clock, 100);
    assert_eq!(game.result(), Some(GameResult::FiftyMoveLimit));
    assert_eq!(GameResult::FiftyMoveLimit.code(), 11);
}

#[test]
fn fifty_move_rule_after_one_hundred_quiet_plies() {
    let mut game = position(
        &[
            ("b1", Color::White, PieceKind::King),
            ("c3", Color::White, PieceKind::Rook),
            ("g8", Color::Black, PieceKind::King),
            ("f6", Color::Black, PieceKind::Rook),
        ],
        Color::White,
        0,
    );
    let mut seen = HashSet::new();
    seen.insert(position_part(&game.snapshot()));

    for ply_number in 1..=100usize {
        let next = game
            .legal_moves()
            .into_iter()
            .filter(|mv| game.board().is_empty(mv.to))
            .find_map(|mv| {
                let mut trial = game.clone();
                let ply = trial.play(mv.from, mv.to, None).ok()?;
                let fresh = !seen.contains(&position_part(&trial.snapshot()));
                let allowed = match trial.result() {
                    None => true,
                    Some(result) => result == GameResult::FiftyMoveLimit,
                };
                (fresh && allowed && !ply.gives_check()).then_some(trial)
            })
            .expect("a fresh quiet move should exist");
        game = next;
        seen.insert(position_part(&game.snapshot()));

        if ply_number < 100 {
            assert_eq!(game.result(), None, "ply {ply_number}");
        }
    }

    assert_eq!(game.state().halfmove_clock, 100);
    assert_eq!(game.result(), Some(GameResult::FiftyMoveLimit));
}

/// Board, side to move, castling and en-passant fields of a snapshot.
fn position_part(snapshot: &str) -> String {
    snapshot.chars().take(71).collect()
}

#[test]
fn promotion_needs_an_explicit_piece() {
    let mut game = position(
        &[
            ("g7", Color::White, PieceKind::Pawn),
            ("a1", Color::White, PieceKind::King),
            ("a8", Color::Black, PieceKind::King),
        ],
        Color::White,
        0,
    );
    let error = game
        .make_move((6, 6), (6, 7), None)
        .expect_err("promotion kind is required");
    assert_eq!(error, MoveError::MustSetPromotion);
    assert_eq!(error.code(), 5);
    assert_eq!(game.current_ply(), 0);

    let ply = game.play_text("g8=R+").expect("rook promotion should be legal");
    assert_eq!(ply.promotion, Some(PieceKind::Rook));
    assert!(ply.gives_check());
    assert_eq!(format_ply(&ply, NotationStyle::Coordinate), "g7g8R");
}

#[test]
fn lowercase_coordinate_promotions_pick_the_named_piece() {
    for (text, kind) in [
        ("g7g8q", PieceKind::Queen),
        ("g7g8r", PieceKind::Rook),
        ("g7g8b", PieceKind::Bishop),
        ("g7g8n", PieceKind::Knight),
    ] {
        let mut game = position(
            &[
                ("g7", Color::White, PieceKind::Pawn),
                ("a1", Color::White, PieceKind::King),
                ("a8", Color::Black, PieceKind::King),
            ],
            Color::White,
            0,
        );
        let resolved = game.resolve_move_text(text).expect("coordinate text resolves");
        assert_eq!(resolved, (sq("g7"), sq("g8"), Some(kind)), "{text}");
        let ply = game.play_text(text).expect("promotion should be legal");
        assert_eq!(ply.promotion, Some(kind), "{text}");
        assert_eq!(game.board().get(sq("g8")), Some(Piece::new(Color::White, kind)));
    }
}

#[test]
fn every_legal_move_keeps_the_movers_king_safe() {
    for config in playout_configs() {
        let report = play_random_game(&config).expect("playout should run");
        let mut game = Game::new();
        for ply in &report.plies {
            let mover = game.side_to_move();
            for mv in game.legal_moves() {
                let mut trial = game.clone();
                let promotion = mv.is_promotion().then_some(PieceKind::Queen);
                trial
                    .play(mv.from, mv.to, promotion)
                    .expect("generated move should be playable");
                assert!(
                    !is_king_in_check(trial.board(), mover),
                    "seed {} left the king in check with {}{}",
                    config.seed,
                    mv.from,
                    mv.to
                );
            }
            game.play(ply.from, ply.to, ply.promotion)
                .expect("recorded ply should replay");
        }
        assert_eq!(game.snapshot(), report.game.snapshot());
    }
}

#[test]
fn undo_restores_every_earlier_position() {
    for config in playout_configs() {
        let mut game = Game::new();
        let mut snapshots = vec![game.snapshot()];
        let report = play_random_game(&config).expect("playout should run");
        for ply in &report.plies {
            game.play(ply.from, ply.to, ply.promotion)
                .expect("recorded ply should replay");
            snapshots.push(game.snapshot());
        }

        for expected in snapshots.iter().rev().skip(1) {
            assert_eq!(game.undo(), Ok(true));
            assert_eq!(&game.snapshot(), expected);
        }
        assert_eq!(game.undo(), Ok(false));

        for expected in snapshots.iter().skip(1) {
            assert_eq!(game.redo(), Ok(true));
            assert_eq!(&game.snapshot(), expected);
        }
        assert_eq!(game.redo(), Ok(false));
    }
}

#[test]
fn history_navigation_is_idempotent() {
    let report = play_random_game(&PlayoutConfig {
        max_plies: 40,
        seed: 11,
        ..PlayoutConfig::default()
    })
    .expect("playout should run");
    let mut game = report.game;
    let end = game.snapshot();
    let total = game.ply_count();

    assert_eq!(game.goto_ply(total / 2), Ok(true));
    let middle = game.snapshot();
    assert_eq!(game.goto_ply(total / 2), Ok(true));
    assert_eq!(game.snapshot(), middle);

    assert_eq!(game.undo(), Ok(true));
    assert_eq!(game.redo(), Ok(true));
    assert_eq!(game.snapshot(), middle);

    assert_eq!(game.goto_last(), Ok(true));
    assert_eq!(game.snapshot(), end);
    assert_eq!(game.goto_first(), Ok(true));
    assert_eq!(game.snapshot(), Game::new().snapshot());
    assert_eq!(game.plies().count(), 0);
    assert_eq!(game.ply_count(), total);
}

#[test]
fn new_move_after_undo_discards_the_future() {
    let mut game = Game::new();
    play_all(&mut game, &["e4", "e5", "Nf3"]);
    game.undo().expect("undo should decode");
    game.undo().expect("undo should decode");
    play_all(&mut game, &["c5"]);

    assert_eq!(game.ply_count(), 2);
    assert_eq!(game.redo(), Ok(false));
    assert_eq!(game.move_list(NotationStyle::Long), vec!["e2-e4", "c7-c5"]);
}

#[test]
fn formatted_moves_resolve_back_to_the_same_move() {
    for config in playout_configs() {
        let report = play_random_game(&config).expect("playout should run");
        let mut game = Game::new();
        for ply in &report.plies {
            for style in [
                NotationStyle::Coordinate,
                NotationStyle::Long,
                NotationStyle::Short,
            ] {
                let text = format_ply(ply, style);
                let resolved = game
                    .resolve_move_text(&text)
                    .unwrap_or_else(|error| panic!("seed {} `{text}`: {error}", config.seed));
                assert_eq!(resolved, (ply.from, ply.to, ply.promotion), "`{text}`");
            }
            game.play(ply.from, ply.to, ply.promotion)
                .expect("recorded ply should replay");
        }
    }
}
