//! Criterion benchmarks for the container decoder.
//!
//! Run with:
//!   cargo bench --bench decode
//!
//! The containers are synthetic but shaped like the game's data: an RLE
//! pass dominated by long runs, and a VLE pass of fixed-width codes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Builds an RLE container of `runs` maximum-length long runs.
fn rle_long_run_container(runs: usize) -> (Vec<u8>, usize) {
    let decoded_len = runs * 0xFFFF;
    let mut v = vec![0x01];
    v.extend_from_slice(&(decoded_len as u32).to_le_bytes()[..3]);
    v.extend_from_slice(&[0, 0, 0, 0]); // reserved
    v.extend_from_slice(&[0x83, 0xA0, 0xA1, 0xA2]); // three escapes, no sequence runs
    for i in 0..runs {
        v.extend_from_slice(&[0xA2, 0xFF, 0xFF, i as u8]);
    }
    (v, decoded_len)
}

/// Builds a VLE container whose stream is all width-8 codes.
fn vle_fixed_width_container(stream_len: usize) -> (Vec<u8>, usize) {
    let mut v = vec![0x02];
    v.extend_from_slice(&(stream_len as u32).to_le_bytes()[..3]);
    v.push(0x88); // eight width slots
    v.extend_from_slice(&[1, 1, 1, 1, 1, 1, 1, 2]); // claims the lookup exactly
    v.extend_from_slice(b"ABCDEFGHI");
    v.extend_from_slice(&vec![0xFF; stream_len]); // prefix 0xFF decodes in one step
    (v, stream_len)
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for &runs in &[4usize, 16] {
        let (container, decoded_len) = rle_long_run_container(runs);
        group.throughput(Throughput::Bytes(decoded_len as u64));
        group.bench_with_input(
            BenchmarkId::new("rle_long_runs", decoded_len),
            &container,
            |b, container| b.iter(|| stunpack::decompress(container).unwrap()),
        );
    }

    for &stream_len in &[65_536usize, 262_144] {
        let (container, decoded_len) = vle_fixed_width_container(stream_len);
        group.throughput(Throughput::Bytes(decoded_len as u64));
        group.bench_with_input(
            BenchmarkId::new("vle_fixed_width", decoded_len),
            &container,
            |b, container| b.iter(|| stunpack::decompress(container).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
