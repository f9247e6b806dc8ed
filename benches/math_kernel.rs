use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orbit_camera::camera::OrbitCamera;
use orbit_camera::geometry::generate_sphere_geometry;
use orbit_camera::math::{invert, look_at, premultiply, rotation_x, rotation_y};

/// Benchmark: Full view matrix rebuild (four premultiplies)
fn bench_recompute_view_matrix(c: &mut Criterion) {
    let mut camera = OrbitCamera::new([1.0, 2.0, 3.0], 40.0, 0.7, 0.3);

    c.bench_function("recompute_view_matrix", |b| {
        b.iter(|| {
            camera.recompute_view_matrix();
            black_box(camera.view_matrix()[0])
        })
    });
}

/// Benchmark: One drag step, the per-event hot path
fn bench_pointer_drag(c: &mut Criterion) {
    let mut camera = OrbitCamera::new([0.0, 0.0, 0.0], 40.0, 0.0, 0.0);
    camera.on_pointer_down(0.0, 0.0);
    let mut x = 0.0f32;

    c.bench_function("pointer_drag_step", |b| {
        b.iter(|| {
            x += 1.0;
            camera.on_pointer_move(black_box(x), black_box(0.0));
        })
    });
}

/// Benchmark: Matrix product and inverse
fn bench_matrix_ops(c: &mut Criterion) {
    let mut a = [0.0; 16];
    let mut b = [0.0; 16];
    rotation_x(&mut a, 0.4);
    rotation_y(&mut b, -1.1);
    let mut out = [0.0; 16];

    c.bench_function("premultiply", |bench| {
        bench.iter(|| black_box(premultiply(&mut out, black_box(&a), black_box(&b))[0]))
    });

    let mut view = [0.0; 16];
    look_at(&mut view, &[4.0, 3.0, 2.0], &[0.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
    c.bench_function("invert", |bench| {
        bench.iter(|| black_box(invert(&mut out, black_box(&view))[0]))
    });
}

/// Benchmark: Icosphere generation at increasing subdivision levels
fn bench_icosphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("icosphere");

    for iterations in [1u32, 3, 5].iter() {
        group.bench_with_input(BenchmarkId::new("iterations", iterations), iterations, |b, &n| {
            b.iter(|| black_box(generate_sphere_geometry(n).vertex_count()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_recompute_view_matrix,
    bench_pointer_drag,
    bench_matrix_ops,
    bench_icosphere
);
criterion_main!(benches);
