use criterion::{BatchSize, Criterion, criterion_group};
use lineclip::{
    Clipper,
    cartesian::{Segment, Window},
};
use rand::Rng;

type Sample = [[f64; 4]; 1000];

fn random_segments() -> Vec<Segment<f64>> {
    let mut rng = rand::rng();

    rng.random::<Sample>()
        .into_iter()
        .map(|coords| Segment::from(coords.map(|coord| coord * 100. - 50.)))
        .collect()
}

pub fn many_segments(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("many segments");

    group.bench_function("small window", |b| {
        let clipper = Clipper::new(Window::from([-5., -5., 5., 5.]));
        b.iter_batched(
            random_segments,
            |segments| clipper.clip_all(segments).count(),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("large window", |b| {
        let clipper = Clipper::new(Window::from([-45., -45., 45., 45.]));
        b.iter_batched(
            random_segments,
            |segments| clipper.clip_all(segments).count(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, many_segments);
