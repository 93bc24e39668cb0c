#![allow(clippy::undocumented_unsafe_blocks)]

use std::{arch::x86_64::*, num::NonZeroUsize};

use crate::util::{Accumulator, Pixel};

/// Builds the table row by row as `I(x, y) = I(x, y - 1) + R(x, y)`, where
/// `R` is the running sum of the current row. The running sum is scalar since
/// `transform` is arbitrary. The add of the row above goes through
/// [`Accumulator::add_row_avx2`], which is vectorized for `u32` and `u64`.
#[target_feature(enable = "avx2")]
pub(super) fn integral_image<T, F>(
    dest: &mut [T::Sum],
    src: &[T],
    width: NonZeroUsize,
    height: NonZeroUsize,
    transform: F,
) where
    T: Pixel,
    F: Fn(T) -> T::Sum,
{
    let width = width.get();
    let height = height.get();

    // Check the array bounds once at the start of the loop.
    assert!(src.len() >= width * height);
    assert!(dest.len() >= width * height);

    for y in 0..height {
        let row = y * width;

        let mut running = T::Sum::default();
        for x in 0..width {
            running = running.wrapping_add(transform(src[row + x]));
            dest[row + x] = running;
        }

        if y == 0 {
            continue;
        }

        let (done, current) = dest.split_at_mut(row);
        // SAFETY: this function only runs with AVX2 enabled.
        unsafe {
            T::Sum::add_row_avx2(&mut current[..width], &done[row - width..]);
        }
    }
}

/// Adds `above` into `row` eight lanes at a time.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn add_row_u32(row: &mut [u32], above: &[u32]) {
    let width = row.len().min(above.len());
    let dest = row.as_mut_ptr();
    let above = above.as_ptr();
    let mut x = 0;

    while x + 8 <= width {
        let upper = _mm256_loadu_si256(above.add(x) as *const __m256i);
        let current = _mm256_loadu_si256(dest.add(x) as *const __m256i);
        _mm256_storeu_si256(
            dest.add(x) as *mut __m256i,
            _mm256_add_epi32(current, upper),
        );
        x += 8;
    }

    while x < width {
        *dest.add(x) = (*dest.add(x)).wrapping_add(*above.add(x));
        x += 1;
    }
}

/// Adds `above` into `row` four lanes at a time.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn add_row_u64(row: &mut [u64], above: &[u64]) {
    let width = row.len().min(above.len());
    let dest = row.as_mut_ptr();
    let above = above.as_ptr();
    let mut x = 0;

    while x + 4 <= width {
        let upper = _mm256_loadu_si256(above.add(x) as *const __m256i);
        let current = _mm256_loadu_si256(dest.add(x) as *const __m256i);
        _mm256_storeu_si256(
            dest.add(x) as *mut __m256i,
            _mm256_add_epi64(current, upper),
        );
        x += 4;
    }

    while x < width {
        *dest.add(x) = (*dest.add(x)).wrapping_add(*above.add(x));
        x += 1;
    }
}
