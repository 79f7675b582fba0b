use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geowarp_image::Image;
use geowarp_imgproc::{
    interpolation::InterpolationMode,
    resize::scale,
    warp::{composite, rotate, CompositeParams},
};

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        for (name, mode) in [
            ("nearest", InterpolationMode::Nearest),
            ("bilinear", InterpolationMode::Bilinear),
        ] {
            group.bench_with_input(
                BenchmarkId::new(name, &parameter_string),
                &image,
                |b, src| b.iter(|| scale(black_box(src), 1.5, 1.5, black_box(mode))),
            );
        }
    }
    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rotate");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();

        let image_f32 = image.cast::<f32>().unwrap();

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &image,
            |b, src| b.iter(|| rotate(black_box(src), black_box(45.0))),
        );

        group.bench_with_input(
            BenchmarkId::new("bilinear_f32", &parameter_string),
            &image_f32,
            |b, src| b.iter(|| rotate(black_box(src), black_box(45.0))),
        );
    }
    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("Composite");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = [*width, *height].into();
        let image = Image::<u8, 3>::new(image_size, vec![0u8; width * height * 3]).unwrap();
        let params = CompositeParams::default()
            .with_scale(1.0, 1.0)
            .with_rotation(30.0)
            .with_translation(10, -5)
            .with_shear(0.1, 0.0);

        group.bench_with_input(
            BenchmarkId::new("bilinear", &parameter_string),
            &(&image, params),
            |b, i| b.iter(|| composite(black_box(i.0), black_box(&i.1))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scale, bench_rotate, bench_composite);
criterion_main!(benches);
