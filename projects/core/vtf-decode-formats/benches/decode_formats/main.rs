use core::alloc::Layout;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use safe_allocator_api::RawAlloc;
use std::hint::black_box;
use vtf_decode_formats::{loader_for, ImageFormat};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

const BENCHED_FORMATS: [ImageFormat; 8] = [
    ImageFormat::RGBA8888,
    ImageFormat::BGR888,
    ImageFormat::BGRX8888,
    ImageFormat::RGB565,
    ImageFormat::BGRA4444,
    ImageFormat::BGRA5551,
    ImageFormat::I8,
    ImageFormat::RGB888Bluescreen,
];

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format Decode (X -> RGBA8888)");

    let width = 1024;
    let height = 1024;
    let mut output = allocate_align_64(width * height * 4);

    for format in BENCHED_FORMATS {
        let Some(loader) = loader_for(format) else {
            continue;
        };
        let input_size = format.frame_size(width, height).unwrap();
        let mut input = allocate_align_64(input_size);
        unsafe {
            let input_ptr = input.as_mut_ptr();
            for i in 0..input_size {
                *input_ptr.add(i) = (i % 251) as u8;
            }
        }

        let input_ptr = input.as_ptr();
        let output_ptr = output.as_mut_ptr();
        group.throughput(Throughput::Bytes(input_size as u64));
        group.bench_function(format.name(), |b| {
            b.iter(|| unsafe {
                loader(input_ptr, output_ptr, width, height);
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
