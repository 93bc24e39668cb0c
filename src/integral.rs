#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;
mod rust;


use std::num::NonZeroUsize;

use cfg_if::cfg_if;

use crate::util::Pixel;

/// Builds a summed-area table (integral image) of `src` into `dest`.
///
/// Every sample is first mapped through `transform`, then each entry of
/// `dest` receives the sum of all mapped samples above and to the left of it,
/// inclusive:
///
/// ```text
/// I(x, y) = i(x, y) + I(x, y - 1) + I(x - 1, y) - I(x - 1, y - 1)
/// ```
///
/// Both buffers are dense and row-major with a pitch equal to `width`.
///
/// # Parameters
/// - `dest`: Destination table, at least `width * height` entries
/// - `src`: Source samples, at least `width * height` entries
/// - `width`: Width of the grid in samples
/// - `height`: Height of the grid in samples
/// - `transform`: Maps a sample to the value that gets accumulated
pub fn integral_image<T, F>(
    dest: &mut [T::Sum],
    src: &[T],
    width: NonZeroUsize,
    height: NonZeroUsize,
    transform: F,
) where
    T: Pixel,
    F: Fn(T) -> T::Sum,
{
    let len = width.get() * height.get();
    debug_assert!(src.len() >= len);
    debug_assert!(dest.len() >= len);

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::integral_image(dest, src, width, height, transform);
                }
                return;
            }
        }
    }

    rust::integral_image(dest, src, width, height, transform);
}

/// Integral image of the samples themselves.
pub fn summed_table<T: Pixel>(
    dest: &mut [T::Sum],
    src: &[T],
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    integral_image(dest, src, width, height, T::widen);
}

/// Integral image of the non-zero flags: every strictly positive sample
/// counts as one.
pub fn nonzero_table<T: Pixel>(
    dest: &mut [T::Sum],
    src: &[T],
    width: NonZeroUsize,
    height: NonZeroUsize,
) {
    let one = T::Sum::from(1u8);
    let zero = T::Sum::default();
    integral_image(dest, src, width, height, |val: T| {
        if val.is_nonzero() { one } else { zero }
    });
}

/// Name of the kernel `integral_image` will dispatch to on this machine.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
#[must_use]
pub fn kernel_name() -> &'static str {
    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                return "avx2";
            }
        }
    }

    "rust"
}
