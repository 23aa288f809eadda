use chart_engine::path::{area_path, line_path, segment};
use chart_engine::{Domain, LinearScale, Point, XScale};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_points(n: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // Waveform with a gap every 97 points.
        let y = if i % 97 == 0 {
            None
        } else {
            Some((i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001)
        };
        v.push(Point::new(i as f64, y));
    }
    v
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_build");
    for &n in &[10_000usize, 50_000usize] {
        let points = gen_points(n);
        let xs = XScale::Linear(LinearScale::new(Domain::new(0.0, n as f64), (0.0, 1024.0)));
        let ys = LinearScale::new(Domain::new(-10.0, 15.0), (640.0, 0.0));
        group.bench_with_input(BenchmarkId::new("line", n), &points, |b, pts| {
            b.iter(|| {
                let segments = segment(pts);
                black_box(line_path(&segments, &xs, &ys));
            });
        });
        group.bench_with_input(BenchmarkId::new("area", n), &points, |b, pts| {
            b.iter(|| {
                let segments = segment(pts);
                black_box(area_path(&segments, &xs, &ys, 640.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
