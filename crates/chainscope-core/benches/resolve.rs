use chainscope_core::icon::resolve;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_resolve(c: &mut Criterion) {
    let names = [
        "Ethereum Mainnet",
        "Base Sepolia",
        "op_mainnet",
        "Arbitrum",
        "zk sync era (testnet)",
    ];
    c.bench_function("resolve", |b| {
        b.iter(|| {
            for name in names {
                black_box(resolve(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
