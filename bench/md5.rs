use criterion::*;

const SIZES: [usize; 6] = [16, 64, 256, 1024, 8192, 65536];

fn bench_md5(c: &mut Criterion) {
    let mut group = c.benchmark_group("md5");
    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("hashgen", size), &data, |b, data| {
            b.iter(|| black_box(hashgen::digest_md5(data)));
        });
        group.bench_with_input(BenchmarkId::new("md5 crate", size), &data, |b, data| {
            b.iter(|| black_box(md5::compute(data)));
        });
    }
    group.finish();
}

fn bench_md5_encode(c: &mut Criterion) {
    let digest = hashgen::digest_md5(b"abc");
    c.bench_function("md5 digest to hex", |b| b.iter(|| black_box(digest.to_hex())));
    c.bench_function("md5 digest to base64", |b| b.iter(|| black_box(digest.to_base64())));
}

criterion_group!(benches, bench_md5, bench_md5_encode);
criterion_main!(benches);
