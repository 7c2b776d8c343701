use criterion::{black_box, criterion_group, criterion_main, Criterion};
use driftfield::frame;
use driftfield::options::{MotionOptions, SceneOptions};
use driftfield::scene::Scene;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn advance_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(9);
    let mut scene = Scene::generate(&SceneOptions::default(), &mut rng);
    let motion = MotionOptions::default();
    let mut t = 0.0_f32;

    c.bench_function("advance_default_scene", |b| {
        b.iter(|| {
            t += 0.016;
            frame::advance(black_box(&mut scene), &motion, t, 250.0);
        })
    });
}

fn scene_generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_generate");

    for count in [100u32, 1000, 3000, 10000] {
        let options = SceneOptions {
            point_count: count,
            ..SceneOptions::default()
        };
        group.bench_function(format!("{count}_points"), |b| {
            let mut rng = StdRng::seed_from_u64(u64::from(count));
            b.iter(|| black_box(Scene::generate(&options, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, advance_benchmark, scene_generate_benchmark);
criterion_main!(benches);
