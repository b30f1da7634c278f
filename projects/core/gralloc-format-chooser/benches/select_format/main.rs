use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use gralloc_format_chooser::reference::reference_block_table;
use gralloc_format_chooser::{
    FormatSelector, HalPixelFormat, PrivateRange, SelectorConfigBuilder, UsageFlags,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format Selection");
    let selector = FormatSelector::new(
        reference_block_table(),
        SelectorConfigBuilder::new().display_size(1920, 1080).build(),
    );

    let rgba = HalPixelFormat::Rgba8888.raw();
    let size = 1920 * 1080 * 4;

    // Every block matches, so every candidate is visited three times.
    let all_blocks = UsageFlags::HW_TEXTURE | UsageFlags::HW_COMPOSER | UsageFlags::HW_CAMERA_READ;
    group.bench_function("scored_all_blocks", |b| {
        b.iter(|| selector.select_format(black_box(rgba), black_box(all_blocks), black_box(size)))
    });

    group.bench_function("scored_gpu_only", |b| {
        b.iter(|| {
            selector.select_format(
                black_box(rgba),
                black_box(UsageFlags::HW_TEXTURE),
                black_box(size),
            )
        })
    });

    group.bench_function("software_bypass", |b| {
        b.iter(|| {
            selector.select_format(
                black_box(rgba),
                black_box(UsageFlags::SW_READ_OFTEN),
                black_box(size),
            )
        })
    });

    let private = PrivateRange::AfbcWideBlk.encode(HalPixelFormat::Rgba8888.base_id());
    group.bench_function("private_decode", |b| {
        b.iter(|| {
            selector.select_format(
                black_box(private),
                black_box(UsageFlags::PRIVATE_FORMAT),
                black_box(size),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
