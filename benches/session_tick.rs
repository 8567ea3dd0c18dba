use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forest_quest::core::config::GameConfig;
use forest_quest::quest::Session;
use forest_quest::simulation::MovementIntent;

fn tick_benchmark(c: &mut Criterion) {
    c.bench_function("session_tick_with_pursuit", |b| {
        let mut session = Session::new(GameConfig::default());
        // Walk up to Echo so the Wraith is spawned and pursuing
        session.tick(0.0);
        session.set_intent(MovementIntent::new(true, false, true, false));
        let mut now = 0.0;
        while !session.try_talk() && now < 10.0 {
            now += 1.0 / 60.0;
            session.tick(now);
        }
        session.set_intent(MovementIntent::new(false, false, false, true));

        b.iter(|| {
            now += 1.0 / 60.0;
            session.tick(black_box(now));
        })
    });
}

criterion_group!(benches, tick_benchmark);
criterion_main!(benches);
