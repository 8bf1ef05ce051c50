use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, Criterion};
use safe_allocator_api::RawAlloc;
use std::hint::black_box;
use vtf_decode_dxt1::{decode_dxt1_block, decode_dxt1_image, Dxt1Variant};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("DXT1 Decode (DXT1 -> RGBA8888)");

    // 2048x2048 texture, 2MB of DXT1 blocks
    let width = 2048;
    let height = 2048;
    let dxt1_size = (width / 4) * (height / 4) * 8;
    let blocks_count = dxt1_size / 8;

    let mut input = allocate_align_64(dxt1_size);
    let mut output = allocate_align_64(width * height * 4);

    unsafe {
        let input_ptr = input.as_mut_ptr();
        for block_idx in 0..blocks_count {
            let block_ptr = input_ptr.add(block_idx * 8);

            // Alternate between 4-colour and 3-colour blocks.
            if block_idx % 2 == 0 {
                *block_ptr.add(0) = 0x40;
                *block_ptr.add(1) = 0xF8;
                *block_ptr.add(2) = 0x00;
                *block_ptr.add(3) = 0xF8;
            } else {
                *block_ptr.add(0) = 0x00;
                *block_ptr.add(1) = 0xF8;
                *block_ptr.add(2) = 0x40;
                *block_ptr.add(3) = 0xF8;
            }

            for i in 4..8 {
                *block_ptr.add(i) = ((block_idx * i) % 255) as u8;
            }
        }
    }

    let input_ptr = input.as_ptr();
    let output_ptr = output.as_mut_ptr();
    group.throughput(criterion::Throughput::Bytes(dxt1_size as u64));

    group.bench_function("decode_dxt1_block", |b| {
        b.iter(|| unsafe {
            let mut identical = 0;
            for block_idx in 0..blocks_count {
                let decoded = decode_dxt1_block(input_ptr.add(block_idx * 8), Dxt1Variant::Opaque);
                if decoded.has_identical_pixels() {
                    identical += 1;
                }
            }
            black_box(identical)
        })
    });

    for variant in [Dxt1Variant::Opaque, Dxt1Variant::OneBitAlpha] {
        group.bench_function(format!("decode_dxt1_image_{variant:?}"), |b| {
            b.iter(|| unsafe {
                decode_dxt1_image(input_ptr, output_ptr, width, height, variant);
                black_box(output_ptr);
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
