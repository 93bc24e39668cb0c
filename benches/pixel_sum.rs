use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pixel_sum::{MAX_HEIGHT, MAX_WIDTH, PixelSumU8, PixelSumU16};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

pub fn bench_build_8bit(c: &mut Criterion) {
    c.bench_function("build 8-bit 4096x4096", |b| {
        let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
        let mut data = vec![0u8; MAX_WIDTH * MAX_HEIGHT];
        for p in data.iter_mut() {
            *p = rng.random();
        }

        b.iter(|| PixelSumU8::new(black_box(&data), MAX_WIDTH, MAX_HEIGHT).unwrap())
    });
}

pub fn bench_build_16bit(c: &mut Criterion) {
    c.bench_function("build 16-bit 1024x1024", |b| {
        let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
        let mut data = vec![0u16; 1024 * 1024];
        for p in data.iter_mut() {
            *p = rng.random();
        }

        b.iter(|| PixelSumU16::new(black_box(&data), 1024, 1024).unwrap())
    });
}

pub fn bench_queries(c: &mut Criterion) {
    c.bench_function("queries 8-bit", |b| {
        let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
        let mut data = vec![0u8; 1024 * 1024];
        for p in data.iter_mut() {
            *p = rng.random();
        }
        let pixel_sum = PixelSumU8::new(&data, 1024, 1024).unwrap();
        let rects: Vec<(i32, i32, i32, i32)> = (0..256)
            .map(|_| {
                (
                    rng.random_range(-64..1088),
                    rng.random_range(-64..1088),
                    rng.random_range(-64..1088),
                    rng.random_range(-64..1088),
                )
            })
            .collect();

        b.iter(|| {
            for &(x0, y0, x1, y1) in &rects {
                black_box(pixel_sum.sum(x0, y0, x1, y1));
                black_box(pixel_sum.average(x0, y0, x1, y1));
                black_box(pixel_sum.non_zero_count(x0, y0, x1, y1));
                black_box(pixel_sum.non_zero_average(x0, y0, x1, y1));
            }
        })
    });
}

criterion_group!(bench_pixel_sum, bench_build_8bit, bench_build_16bit, bench_queries);
criterion_main!(bench_pixel_sum);
