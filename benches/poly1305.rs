use cryptal_poly1305::{Backend, mac_with};

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_poly1305(c: &mut Criterion) {
    let key = [0x42u8; 32];
    let msg = vec![0xa5u8; 1024];

    let mut group = c.benchmark_group("poly1305 1024 bytes");
    group.throughput(Throughput::Bytes(msg.len() as u64));

    for &backend in Backend::available() {
        group.bench_function(backend.name(), |b| {
            b.iter(|| mac_with(backend, black_box(&key), black_box(&msg)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_poly1305);
criterion_main!(benches);
