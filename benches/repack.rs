/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use word_repack::prelude::*;

const N: usize = 1 << 20;

pub fn bench_implode(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let bytes: Vec<u8> = (0..N).map(|_| r.random()).collect();
    let mut group = c.benchmark_group("implode");
    group.throughput(Throughput::Bytes(N as u64));

    for e in Endianness::ALL {
        let packer = Packer::from_bytes(64, e).unwrap();
        let mut output = vec![0_u64; N / 8];
        group.bench_function(format!("u8->u64 {}", e), |b| {
            b.iter(|| packer.pack_into(black_box(&bytes), &mut output).unwrap())
        });
        group.bench_function(format!("u8->u64 {} (iter)", e), |b| {
            b.iter(|| {
                packer
                    .iter::<u8, u64, _>(black_box(&bytes).iter().copied())
                    .unwrap()
                    .fold(0, |acc, w| acc ^ w.unwrap())
            })
        });
    }
    group.finish();
}

pub fn bench_explode(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(1);
    let words: Vec<u64> = (0..N / 8).map(|_| r.random()).collect();
    let mut group = c.benchmark_group("explode");
    group.throughput(Throughput::Bytes(N as u64));

    for e in Endianness::ALL {
        let packer = Packer::to_bytes(64, e).unwrap();
        let mut output = vec![0_u8; N];
        group.bench_function(format!("u64->u8 {}", e), |b| {
            b.iter(|| packer.pack_into(black_box(&words), &mut output).unwrap())
        });
    }
    group.finish();
}

pub fn bench_equal(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(2);
    let words: Vec<u32> = (0..N / 4).map(|_| r.random()).collect();
    let mut group = c.benchmark_group("equal");
    group.throughput(Throughput::Bytes(N as u64));

    for e in Endianness::ALL {
        let packer = Packer::new(32, BIG_UNIT_BIG_BIT, 32, e).unwrap();
        let mut output = vec![0_u32; N / 4];
        group.bench_function(format!("u32->u32 {}", e), |b| {
            b.iter(|| packer.pack_into(black_box(&words), &mut output).unwrap())
        });
    }
    group.finish();
}

pub fn bench_par(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(3);
    let bytes: Vec<u8> = (0..N * 16).map(|_| r.random()).collect();
    let packer = Packer::from_bytes(32, LITTLE_UNIT_LITTLE_BIT).unwrap();
    let mut group = c.benchmark_group("par");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("u8->u32 sequential", |b| {
        b.iter(|| packer.pack::<u8, u32>(black_box(&bytes)).unwrap())
    });
    group.bench_function("u8->u32 parallel", |b| {
        b.iter(|| packer.pack_par::<u8, u32>(black_box(&bytes)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_implode, bench_explode, bench_equal, bench_par);
criterion_main!(benches);
