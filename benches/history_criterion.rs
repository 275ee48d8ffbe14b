use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chessboard::game_state::game::Game;
use chessboard::utils::self_play::{play_random_game, PlayoutConfig};

fn playout_lengths() -> &'static [usize] {
    match std::env::var("CHESSBOARD_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => &[40, 120, 300],
        _ => &[40, 120],
    }
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for &max_plies in playout_lengths() {
        let config = PlayoutConfig {
            max_plies,
            seed: 2024,
            ..PlayoutConfig::default()
        };
        let report = play_random_game(&config).expect("playout should run");
        let plies = report.plies.clone();
        group.throughput(Throughput::Elements(plies.len() as u64));

        group.bench_with_input(BenchmarkId::new("replay", plies.len()), &plies, |b, plies| {
            b.iter(|| {
                let mut game = Game::new();
                for ply in plies {
                    game.play(ply.from, ply.to, ply.promotion)
                        .expect("recorded ply should replay");
                }
                black_box(game.current_ply())
            });
        });

        let finished = report.game;
        group.bench_with_input(
            BenchmarkId::new("undo_redo_sweep", plies.len()),
            &finished,
            |b, finished| {
                b.iter(|| {
                    let mut game = finished.clone();
                    while game.undo().expect("undo should decode") {}
                    while game.redo().expect("redo should decode") {}
                    black_box(game.current_ply())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(history_benches, bench_history);
criterion_main!(history_benches);
