#![allow(dead_code)]

use pixel_sum::{Pixel, PixelSum};

/// Asserts that `actual` is within `10^-precision` of `expected`. A precision
/// of 0 demands exact equality.
#[macro_export]
macro_rules! assert_near {
    ($actual:expr, $expected:expr, $precision:expr) => {{
        let actual = $actual as f64;
        let expected = $expected as f64;
        let precision: i32 = $precision;
        let epsilon = if precision == 0 {
            0.0
        } else {
            0.1f64.powi(precision)
        };
        assert!(
            (actual - expected).abs() <= epsilon,
            "actual {} which expects {} ({} eps)",
            actual,
            expected,
            epsilon
        );
    }};
}

/// Results of calling every getter over one rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Getters {
    pub average: f64,
    pub sum: u64,
    pub non_zero_average: f64,
    pub non_zero_count: u64,
}

pub fn all_getters<T>(pixel_sum: &PixelSum<T>, rect: (i32, i32, i32, i32)) -> Getters
where
    T: Pixel,
    T::Sum: Into<u64>,
{
    let (x0, y0, x1, y1) = rect;
    Getters {
        average: pixel_sum.average(x0, y0, x1, y1),
        sum: pixel_sum.sum(x0, y0, x1, y1).into(),
        non_zero_average: pixel_sum.non_zero_average(x0, y0, x1, y1),
        non_zero_count: pixel_sum.non_zero_count(x0, y0, x1, y1).into(),
    }
}

/// Rectangle covering exactly a `width` x `height` grid.
pub fn full_rect(width: usize, height: usize) -> (i32, i32, i32, i32) {
    (
        0,
        0,
        i32::try_from(width).expect("width fits i32") - 1,
        i32::try_from(height).expect("height fits i32") - 1,
    )
}
