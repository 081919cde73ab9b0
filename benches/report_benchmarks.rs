use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffreport::compression::{build_frequency_table, build_huffman_tree, Report};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_text(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            // Roughly text-like: mostly lowercase, some spaces and newlines.
            match rng.gen_range(0..100) {
                0..=14 => b' ',
                15 => b'\n',
                _ => rng.gen_range(b'a'..=b'z'),
            }
        })
        .collect()
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..len).map(|_| rng.gen()).collect()
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    for size in [1_000, 100_000] {
        let text = generate_text(size);
        group.bench_with_input(BenchmarkId::new("text", size), &text, |b, data| {
            b.iter(|| {
                let table = build_frequency_table(black_box(data));
                Report::generate(&table).unwrap()
            })
        });
        let bytes = random_bytes(size);
        group.bench_with_input(BenchmarkId::new("bytes", size), &bytes, |b, data| {
            b.iter(|| {
                let table = build_frequency_table(black_box(data));
                Report::generate(&table).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let table = build_frequency_table(&random_bytes(10_000));
    c.bench_function("build_tree_256", |b| {
        b.iter(|| build_huffman_tree(black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_report, bench_tree);
criterion_main!(benches);
