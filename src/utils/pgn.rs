//! PGN read/write utilities for game history interchange.
//!
//! Serializes a game's headers and short-notation movetext to PGN and
//! replays PGN movetext through [`Game::play_text`]. Only games that start
//! from the standard position can be read back.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::PgnError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game::Game;
use crate::game_state::game_state::GameState;
use crate::utils::fen_generator::generate_fen;
use crate::utils::notation::NotationStyle;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub game: Game,
    pub result: String,
}

/// Writes `game` with the seven-tag roster, dated today.
pub fn write_pgn(game: &Game) -> Result<String, PgnError> {
    let result = game.result().map_or("*", GameResult::pgn_token);

    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    let (board, state) = game.starting_position()?;
    if board != Board::standard() || state != GameState::new_game() {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), generate_fen(&board, &state, 1));
    }

    Ok(write_pgn_with_headers(game, &headers))
}

pub fn write_pgn_with_headers(game: &Game, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let black_first = game.plies().next().is_some_and(|ply| ply.mover == Color::Black);
    let offset = usize::from(black_first);
    let moves = game.move_list(NotationStyle::Short);
    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 2);
    for (index, san) in moves.into_iter().enumerate() {
        let ply = index + offset;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, san));
        } else if index == 0 {
            movetext_parts.push(format!("{}... {}", (ply / 2) + 1, san));
        } else {
            movetext_parts.push(san);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, PgnError> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        return Err(PgnError::UnsupportedSetup);
    }

    let mut game = Game::new();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        let token = strip_move_number(token);
        if token.is_empty() || token.starts_with('$') {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        game.play_text(token).map_err(|source| PgnError::Replay {
            ply: game.current_ply() + 1,
            text: token.to_owned(),
            source,
        })?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        game,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), PgnError> {
    let malformed = || PgnError::MalformedHeader(line.to_owned());
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(malformed)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(malformed)?
        .replace("\\\"", "\"");
    Ok((key.trim().to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drops a leading move number (`12.`, `12...`), keeping any move glued to it.
fn strip_move_number(token: &str) -> &str {
    let digits = token.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 || !token[digits..].starts_with('.') {
        return token;
    }
    token[digits..].trim_start_matches('.')
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
