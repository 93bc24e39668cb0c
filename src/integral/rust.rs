use std::num::NonZeroUsize;

use crate::util::{Accumulator, Pixel};

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

    // first row
    dest[0] = transform(src[0]);
    for x in 1..width {
        dest[x] = dest[x - 1].wrapping_add(transform(src[x]));
    }

    // The left term and the upper term overlap on the upper left cell, so
    // the sum may leave the accumulator range before the subtraction brings
    // it back.
    for y in 1..height {
        let row = y * width;
        let above = row - width;

        dest[row] = transform(src[row]).wrapping_add(dest[above]);
        for x in 1..width {
            dest[row + x] = transform(src[row + x])
                .wrapping_add(dest[above + x])
                .wrapping_add(dest[row + x - 1])
                .wrapping_sub(dest[above + x - 1]);
        }
    }
}
