use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scene_animator::animator::Animator;
use scene_animator::body::OrbitingBody;
use scene_animator::clock::SpeedLimits;
use scene_animator::scenes::{create_garden_scene, create_solar_scene};
use scene_animator::SceneConfig;

const FRAME: f32 = 1.0 / 60.0;

fn bench_solar_tick(c: &mut Criterion) {
    let mut animator = Animator::new(create_solar_scene()).expect("valid scene");

    c.bench_function("solar_tick", |b| {
        b.iter(|| animator.tick(black_box(FRAME)))
    });
}

fn bench_garden_tick(c: &mut Criterion) {
    let mut animator = Animator::new(create_garden_scene()).expect("valid scene");
    animator.toggle_pause(); // scene ships stopped

    c.bench_function("garden_tick", |b| {
        b.iter(|| animator.tick(black_box(FRAME)))
    });
}

/// Deep parent chains stress the per-tick parent lookups
fn bench_chained_bodies(c: &mut Criterion) {
    let mut bodies = vec![OrbitingBody::new("body-0", 2.0, 0.5).bobbing(0.2, 0.5)];
    for i in 1..1000 {
        bodies.push(
            OrbitingBody::new(&format!("body-{i}"), 2.0, 0.5)
                .around(&format!("body-{}", i - 1))
                .bobbing(0.2, 0.5),
        );
    }
    let mut animator =
        Animator::new(SceneConfig::new(bodies, SpeedLimits::signed())).expect("valid scene");

    c.bench_function("chained_1000_tick", |b| {
        b.iter(|| animator.tick(black_box(FRAME)))
    });
}

criterion_group!(
    benches,
    bench_solar_tick,
    bench_garden_tick,
    bench_chained_bodies
);
criterion_main!(benches);
