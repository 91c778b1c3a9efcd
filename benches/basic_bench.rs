use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tagged_bitvec::{BitVector, Format};

// Bit lengths from one byte to a few kilobytes
const SIZES: &[usize] = &[8, 64, 512, 4096, 32768];

/// Builds a vector of `bits` bits with every `step`-th bit set.
fn striped(bits: usize, step: usize) -> BitVector {
    let mut v = BitVector::new(bits).unwrap();
    for i in (0..bits).step_by(step) {
        v.set(i).unwrap();
    }
    v
}

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    group.bench_function("set", |b| {
        let mut bits = BitVector::new(1024).unwrap();
        let mut i = 0;
        b.iter(|| {
            bits.set(black_box(i % 1024)).unwrap();
            i += 1;
        });
    });

    group.bench_function("toggle", |b| {
        let mut bits = BitVector::new(1024).unwrap();
        let mut i = 0;
        b.iter(|| {
            bits.toggle(black_box(i % 1024)).unwrap();
            i += 1;
        });
    });

    group.bench_function("test", |b| {
        let bits = striped(1024, 3);
        let mut i = 0;
        b.iter(|| {
            black_box(bits.test(i % 1024).unwrap());
            i += 1;
        });
    });

    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for &size in SIZES {
        let bits = striped(size, 3);

        for n in [1isize, 8, 13] {
            group.bench_with_input(
                BenchmarkId::new(format!("left_{n}"), size),
                &bits,
                |b, bits| {
                    let mut v = bits.clone();
                    b.iter(|| {
                        black_box(v.shift(n));
                    });
                },
            );

            group.bench_with_input(
                BenchmarkId::new(format!("right_{n}"), size),
                &bits,
                |b, bits| {
                    let mut v = bits.clone();
                    b.iter(|| {
                        black_box(v.shift(-n));
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwise");

    for &size in SIZES {
        let a = striped(size, 2);
        let other = striped(size, 3);

        group.bench_with_input(BenchmarkId::new("and", size), &other, |b, other| {
            let mut v = a.clone();
            b.iter(|| {
                black_box(v.and(other).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("xor", size), &other, |b, other| {
            let mut v = a.clone();
            b.iter(|| {
                black_box(v.xor(other).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("nor", size), &other, |b, other| {
            let mut v = a.clone();
            b.iter(|| {
                black_box(v.nor(other).unwrap());
            });
        });

        group.bench_with_input(BenchmarkId::new("equal", size), &other, |b, other| {
            b.iter(|| {
                black_box(a.equal(other).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");

    for &size in SIZES {
        let bits = striped(size, 5);

        for format in [Format::Binary, Format::Hex, Format::Base64] {
            group.bench_with_input(
                BenchmarkId::new(format!("{format:?}"), size),
                &bits,
                |b, bits| {
                    b.iter(|| {
                        black_box(bits.stringify(format));
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &size in SIZES {
        let bits = striped(size, 5);

        for format in [Format::Binary, Format::Hex, Format::Base64] {
            let text = bits.stringify(format);
            group.bench_with_input(
                BenchmarkId::new(format!("{format:?}"), size),
                &text,
                |b, text| {
                    b.iter(|| {
                        black_box(BitVector::parse(text).unwrap());
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");

    group.bench_function("grow_and_shrink", |b| {
        let bits = striped(512, 2);
        b.iter(|| {
            let mut v = bits.clone();
            v.resize(4096).unwrap().resize(256).unwrap();
            black_box(v);
        });
    });

    group.bench_function("clone", |b| {
        let bits = striped(4096, 2);
        b.iter(|| {
            black_box(bits.clone());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bit_access,
    bench_shift,
    bench_bitwise,
    bench_stringify,
    bench_parse,
    bench_resize,
);

criterion_main!(benches);
