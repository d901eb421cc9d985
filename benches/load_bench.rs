//! Benchmarks for autobuild parsing and lookups

use std::io::Cursor;

use autobuild::config::LoaderConfig;
use autobuild::store::ConfigStore;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_config(entries: usize) -> String {
    let mut input = String::from("# generated benchmark input\n");
    for i in (0..entries).rev() {
        input.push_str(&format!("option.{:05} = value number {}\n", i, i));
    }
    input
}

fn load_benchmarks(c: &mut Criterion) {
    let input = sample_config(1000);
    let config = LoaderConfig::builder().unbounded().build();

    c.bench_function("parse_1000_entries", |b| {
        b.iter(|| ConfigStore::parse(black_box(input.as_bytes()), &config).unwrap())
    });

    c.bench_function("from_reader_1000_entries", |b| {
        b.iter(|| {
            let mut reader = Cursor::new(input.as_bytes());
            ConfigStore::from_reader(&mut reader, "bench.conf", &config).unwrap()
        })
    });

    let store = ConfigStore::parse(input.as_bytes(), &config).unwrap();
    c.bench_function("get_hit", |b| {
        b.iter(|| store.get(black_box("option.00500")))
    });
    c.bench_function("get_miss", |b| {
        b.iter(|| store.get(black_box("option.99999")))
    });
}

criterion_group!(benches, load_benchmarks);
criterion_main!(benches);
