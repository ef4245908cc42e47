use criterion::*;

const SIZES: [usize; 7] = [16, 64, 128, 256, 1024, 8192, 65536];

fn bench_sha512(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha512");
    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("hashgen", size), &data, |b, data| {
            b.iter(|| black_box(hashgen::digest_sha512(data)));
        });
        group.bench_with_input(BenchmarkId::new("ring", size), &data, |b, data| {
            b.iter(|| black_box(ring::digest::digest(&ring::digest::SHA512, data)));
        });
    }
    group.finish();
}

fn bench_sha512_streaming(c: &mut Criterion) {
    let data = vec![0u8; 65536];
    c.bench_function("sha512 update 1 KiB chunks", |b| {
        b.iter(|| {
            let mut sha512 = hashgen::Sha512::new();
            for chunk in data.chunks(1024) {
                sha512.update(chunk);
            }
            black_box(sha512.finalize())
        })
    });
}

criterion_group!(benches, bench_sha512, bench_sha512_streaming);
criterion_main!(benches);
