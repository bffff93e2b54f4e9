use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rbxbin::codec::interleave::{deinterleave, interleave};
use rbxbin::types::RbxVector3;
use rbxbin::{values_from_bytes, values_to_bytes, RbxType, RbxValue};

fn make_ints(count: usize) -> Vec<RbxValue> {
    (0..count).map(|i| RbxValue::Int(i as i32 - 512)).collect()
}

fn make_vectors(count: usize) -> Vec<RbxValue> {
    (0..count)
        .map(|i| {
            RbxValue::Vector3(RbxVector3 {
                x: i as f32 * 0.5,
                y: i as f32 * -1.25,
                z: 4096.0 - i as f32,
            })
        })
        .collect()
}

fn make_references(count: usize) -> Vec<RbxValue> {
    (0..count).map(|i| RbxValue::Reference(i as i32 * 3)).collect()
}

fn bench_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleave");
    for &size in &[4096usize, 65_536] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("stride4", size), &data, |b, data| {
            b.iter(|| {
                let mut buf = data.clone();
                interleave(&mut buf, 4).unwrap();
                deinterleave(&mut buf, 4).unwrap();
                buf
            });
        });
    }
    group.finish();
}

fn bench_arrays(c: &mut Criterion) {
    let cases: [(&str, RbxType, Vec<RbxValue>); 3] = [
        ("int", RbxType::Int, make_ints(1024)),
        ("vector3", RbxType::Vector3, make_vectors(1024)),
        ("reference", RbxType::Reference, make_references(1024)),
    ];

    let mut group = c.benchmark_group("array_codec");
    for (name, type_id, values) in &cases {
        let blob = values_to_bytes(*type_id, values).unwrap();
        group.throughput(Throughput::Bytes(blob.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), values, |b, values| {
            b.iter(|| values_to_bytes(*type_id, values).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &blob, |b, blob| {
            b.iter(|| values_from_bytes(*type_id, blob).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interleave, bench_arrays);
criterion_main!(benches);
