//! Turn-loop throughput: draw a hand, play it out, reset, repeat.

use cohesion_engine::{PlayerId, RunEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn play_turns(engine: &mut RunEngine, player: PlayerId, turns: usize) {
    for _ in 0..turns {
        engine.draw(player, 5).unwrap();
        while engine.state(player).unwrap().hand_size() > 0 {
            let _ = engine.play_card(player, 1);
        }
        engine.reset_turn_resources(player).unwrap();
        engine.take_events();
    }
}

fn bench_turn_loop(c: &mut Criterion) {
    let player = PlayerId::new(1);

    c.bench_function("turn_loop_10", |b| {
        b.iter(|| {
            let mut engine = RunEngine::standard().unwrap();
            engine.initialize_player(player);
            play_turns(&mut engine, player, black_box(10));
            engine
        })
    });

    c.bench_function("state_clone", |b| {
        let mut engine = RunEngine::standard().unwrap();
        engine.initialize_player(player);
        play_turns(&mut engine, player, 3);
        b.iter(|| black_box(engine.state(player).unwrap().clone()))
    });
}

criterion_group!(benches, bench_turn_loop);
criterion_main!(benches);
