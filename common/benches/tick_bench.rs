use criterion::{criterion_group, criterion_main, Criterion};

use common::games::flappy::{FlappyDifficulty, FlappyGameState, FlappyPhase};
use common::games::snake::{Direction, SnakeDifficulty, SnakeGameState, SnakeSettings};
use common::games::SessionRng;

fn bench_snake_1000_ticks() {
    let mut rng = SessionRng::new(7);
    let settings = SnakeSettings::new(SnakeDifficulty::Normal);
    let mut state = SnakeGameState::new(&settings, &mut rng);

    let turns = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    for i in 0..1000 {
        state.set_direction(turns[(i / 5) % turns.len()]);
        state.update(&mut rng);
        if !state.is_running() {
            state.reset(&mut rng);
        }
    }
}

fn bench_flappy_1000_ticks() {
    let mut rng = SessionRng::new(7);
    let mut state = FlappyGameState::new(FlappyDifficulty::Normal);
    state.flap();

    for i in 0..1000 {
        if i % 15 == 0 {
            state.flap();
        }
        state.update(&mut rng);
        if state.phase == FlappyPhase::GameOver {
            state.flap();
            state.flap();
        }
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks");

    group.bench_function("snake_1000_ticks", |b| b.iter(bench_snake_1000_ticks));
    group.bench_function("flappy_1000_ticks", |b| b.iter(bench_flappy_1000_ticks));

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
