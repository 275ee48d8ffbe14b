//! Random self-play driver.
//!
//! Run with:
//! `cargo run --release -- --seed 42 --max-plies 300`
//! `cargo run --release -- --verbose`

use chessboard::utils::pgn::write_pgn;
use chessboard::utils::render_game_state::render_game_state;
use chessboard::utils::self_play::{play_random_game, PlayoutConfig};
use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config = PlayoutConfig {
        verbose,
        ..PlayoutConfig::default()
    };
    if let Some(seed) = flag_value(&args, "--seed") {
        config.seed = seed.parse()?;
    }
    if let Some(max_plies) = flag_value(&args, "--max-plies") {
        config.max_plies = max_plies.parse()?;
    }

    let report = play_random_game(&config)?;
    let game = &report.game;

    println!("{}", render_game_state(game.board()));
    println!();
    match report.result {
        Some(result) => println!("result: {} (code {})", result, result.code()),
        None => println!("stopped after {} plies", report.plies.len()),
    }
    println!("fen: {}", game.fen());
    println!();
    print!("{}", write_pgn(game)?);
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|index| args.get(index + 1))
        .map(String::as_str)
}
