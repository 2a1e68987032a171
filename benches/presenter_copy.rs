//! Cost of handing a rendered frame to an RGBA framebuffer.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use cafe_wall::PixelBuffer;
use cafe_wall::adapters::pixel_format::copy_rgb_to_rgba;

fn bench_copy_rgb_to_rgba(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_rgb_to_rgba");

    for &(width, height) in &[(800u32, 600u32), (1920, 1080), (2400, 1600)] {
        let src = PixelBuffer::new(width, height).unwrap();
        let mut dst = vec![0u8; width as usize * height as usize * 4];

        group.throughput(Throughput::Bytes(src.buffer_size() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &src,
            |bencher, src| bencher.iter(|| copy_rgb_to_rgba(src, &mut dst).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_copy_rgb_to_rgba);
criterion_main!(benches);
