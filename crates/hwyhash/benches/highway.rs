//! HighwayHash benchmarks.
//!
//! Compares this crate against the official `highway` crate across all three
//! digest widths, and measures streaming overhead at various chunk sizes.

use core::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, SamplingMode, Throughput, criterion_group, criterion_main};
use hwyhash::{FastHash as _, Highway64, Highway128, Highway256, HighwayHasher, Key};

mod common;

const KEY: Key = Key([
  0x0706_0504_0302_0100,
  0x0F0E_0D0C_0B0A_0908,
  0x1716_1514_1312_1110,
  0x1F1E_1D1C_1B1A_1918,
]);

#[inline]
fn official64(input: &[u8]) -> u64 {
  use highway::HighwayHash as _;
  let mut h = highway::HighwayHasher::new(highway::Key(KEY.0));
  h.append(input);
  h.finalize64()
}

#[inline]
fn official128(input: &[u8]) -> [u64; 2] {
  use highway::HighwayHash as _;
  let mut h = highway::HighwayHasher::new(highway::Key(KEY.0));
  h.append(input);
  h.finalize128()
}

#[inline]
fn official256(input: &[u8]) -> [u64; 4] {
  use highway::HighwayHash as _;
  let mut h = highway::HighwayHasher::new(highway::Key(KEY.0));
  h.append(input);
  h.finalize256()
}

fn highway_oneshot_comparison(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("highway/oneshot");
  group.sample_size(40);
  group.warm_up_time(Duration::from_secs(2));
  group.measurement_time(Duration::from_secs(4));
  group.sampling_mode(SamplingMode::Flat);

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("highway64/hwyhash", len), data, |b, d| {
      b.iter(|| black_box(Highway64::hash_with_seed(KEY, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("highway64/highway", len), data, |b, d| {
      b.iter(|| black_box(official64(black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("highway128/hwyhash", len), data, |b, d| {
      b.iter(|| black_box(Highway128::hash_with_seed(KEY, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("highway128/highway", len), data, |b, d| {
      b.iter(|| black_box(official128(black_box(d))))
    });

    group.bench_with_input(BenchmarkId::new("highway256/hwyhash", len), data, |b, d| {
      b.iter(|| black_box(Highway256::hash_with_seed(KEY, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("highway256/highway", len), data, |b, d| {
      b.iter(|| black_box(official256(black_box(d))))
    });
  }

  group.finish();
}

fn highway_streaming(c: &mut Criterion) {
  let data_1mb = common::pseudo_random_bytes(1024 * 1024, 0x00AD_1AB1_E0F0_0D01);
  let data_1mb = black_box(data_1mb);

  let mut group = c.benchmark_group("highway/streaming");
  group.sample_size(30);
  group.warm_up_time(Duration::from_secs(2));
  group.measurement_time(Duration::from_secs(4));
  group.sampling_mode(SamplingMode::Flat);
  group.throughput(Throughput::Bytes(data_1mb.len() as u64));

  // Chunk sizes around and well above the 32-byte packet size.
  for chunk_size in [32, 64, 128, 256, 1024, 4096, 16384, 65536] {
    group.bench_function(format!("hwyhash/{chunk_size}B-chunks"), |b| {
      b.iter(|| {
        let mut h = HighwayHasher::new(KEY);
        for chunk in data_1mb.chunks(chunk_size) {
          h.append(chunk);
        }
        black_box(h.finalize64())
      })
    });
  }

  group.bench_function("hwyhash/oneshot-baseline", |b| {
    b.iter(|| black_box(Highway64::hash_with_seed(KEY, &data_1mb)))
  });

  group.finish();
}

fn highway_finalize_widths(c: &mut Criterion) {
  let data = common::pseudo_random_bytes(4096, 0xFEED_0CAF_E000_0002);
  let data = black_box(data);

  let mut group = c.benchmark_group("highway/finalize");
  group.throughput(Throughput::Bytes(data.len() as u64));

  group.bench_function("finalize64", |b| {
    b.iter(|| black_box(Highway64::hash_with_seed(KEY, &data)))
  });
  group.bench_function("finalize128", |b| {
    b.iter(|| black_box(Highway128::hash_with_seed(KEY, &data)))
  });
  group.bench_function("finalize256", |b| {
    b.iter(|| black_box(Highway256::hash_with_seed(KEY, &data)))
  });

  group.finish();
}

criterion_group!(benches, highway_oneshot_comparison, highway_streaming, highway_finalize_widths);
criterion_main!(benches);
