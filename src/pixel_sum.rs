
use std::num::NonZeroUsize;

use anyhow::{Result, bail};

use crate::{
    integral::{nonzero_table, summed_table},
    params::{Dimensions, PixelSumError},
    rect::{Rect, Region},
    util::{Accumulator, Pixel},
};

/// Answers sum, average and non-zero statistics for any rectangle of a fixed
/// grid in constant time.
///
/// The grid is copied on construction and never changes afterwards, so one
/// instance can be shared between threads without locking. Cloning copies
/// every table.
///
/// Every query takes two opposite corners `(x0, y0)` and `(x1, y1)` in any
/// order. Rectangles that stick out of the grid are clipped to it, and
/// rectangles that miss it entirely yield zero.
#[derive(Debug, Clone)]
pub struct PixelSum<T: Pixel> {
    width: NonZeroUsize,
    height: NonZeroUsize,

    /// Copy of the input samples.
    pixels: Vec<T>,
    /// Integral image of the non-zero flags of `pixels`.
    nonzero: Vec<T::Sum>,
    /// Integral image of `pixels`. Each entry is the sum of the sample at
    /// the same position and all samples above and to the left of it.
    summed: Vec<T::Sum>,
}

/// 8-bit grid with 32-bit sums.
pub type PixelSumU8 = PixelSum<u8>;
/// 16-bit grid with 64-bit sums.
pub type PixelSumU16 = PixelSum<u16>;

impl<T: Pixel> PixelSum<T> {
    /// Copies the first `width * height` samples of `buffer` (row-major) and
    /// builds the summed-area tables over them.
    ///
    /// # Errors
    /// - [`PixelSumError::DimensionOutOfBounds`] if `width` or `height` is 0
    ///   or exceeds [`MAX_WIDTH`](crate::MAX_WIDTH) /
    ///   [`MAX_HEIGHT`](crate::MAX_HEIGHT)
    /// - [`PixelSumError::BufferTooSmall`] if `buffer` holds fewer than
    ///   `width * height` samples
    pub fn new(buffer: &[T], width: usize, height: usize) -> Result<Self> {
        Self::with_dimensions(buffer, Dimensions::new(width, height)?)
    }

    /// Same as [`PixelSum::new`] with dimensions that were validated up front.
    pub fn with_dimensions(buffer: &[T], dimensions: Dimensions) -> Result<Self> {
        let width = dimensions.width();
        let height = dimensions.height();
        let len = dimensions.sample_count();

        if buffer.len() < len {
            log_event!(WARN, expected = len, actual = buffer.len(), "buffer too small");
            bail!(PixelSumError::BufferTooSmall {
                expected: len,
                actual: buffer.len(),
            });
        }

        let pixels = buffer[..len].to_vec();

        let mut nonzero = vec![T::Sum::default(); len];
        nonzero_table(&mut nonzero, &pixels, width, height);

        let mut summed = vec![T::Sum::default(); len];
        summed_table(&mut summed, &pixels, width, height);

        log_event!(
            DEBUG,
            width = width.get(),
            height = height.get(),
            kernel = crate::integral::kernel_name(),
            "built pixel sum tables"
        );

        Ok(Self {
            width,
            height,
            pixels,
            nonzero,
            summed,
        })
    }

    #[must_use]
    pub fn width(&self) -> NonZeroUsize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> NonZeroUsize {
        self.height
    }

    /// Sum of the samples inside the rectangle.
    #[must_use]
    pub fn sum(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> T::Sum {
        self.region(Rect::new(x0, y0, x1, y1))
            .map_or_else(T::Sum::default, |region| {
                self.summed_area(&self.summed, region)
            })
    }

    /// Sum of the samples inside the rectangle divided by the rectangle's
    /// full area.
    ///
    /// The area is that of the requested rectangle, not of its clipped part:
    /// on a 2x2 grid of ones, `average(0, 0, 3, 3)` is `4 / 16`.
    #[must_use]
    pub fn average(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        let rect = Rect::new(x0, y0, x1, y1);
        let Some(region) = self.region(rect) else {
            return 0.0;
        };

        self.summed_area(&self.summed, region).to_f64() / rect.area()
    }

    /// Number of strictly positive samples inside the rectangle.
    #[must_use]
    pub fn non_zero_count(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> T::Sum {
        self.region(Rect::new(x0, y0, x1, y1))
            .map_or_else(T::Sum::default, |region| {
                self.summed_area(&self.nonzero, region)
            })
    }

    /// Average of the strictly positive samples inside the rectangle, or
    /// `0.0` if there are none.
    #[must_use]
    pub fn non_zero_average(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        let Some(region) = self.region(Rect::new(x0, y0, x1, y1)) else {
            return 0.0;
        };

        let count = self.summed_area(&self.nonzero, region);
        if count == T::Sum::default() {
            return 0.0;
        }

        self.summed_area(&self.summed, region).to_f64() / count.to_f64()
    }

    /// Whether the index holds data. Always true for an index returned by
    /// [`PixelSum::new`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.pixels.is_empty() && !self.nonzero.is_empty() && !self.summed.is_empty()
    }

    fn region(&self, rect: Rect) -> Option<Region> {
        let region = rect.clamp(self.width, self.height);
        if region.is_none() {
            log_event!(TRACE, ?rect, "query rectangle is outside the grid");
        }
        region
    }

    /// Extracts the sum over `region` from a summed-area table.
    fn summed_area(&self, table: &[T::Sum], region: Region) -> T::Sum {
        /*
         * (x0, y0)        (x1, y0)
         *    A---------------B
         *    |               |
         *    | D - B - C + A |
         *    |               |
         *    C---------------D
         * (x0, y1)        (x1, y1)
         */
        let width = self.width.get();
        let at = |x: usize, y: usize| table[y * width + x];
        let zero = T::Sum::default();
        let Region { x0, y0, x1, y1 } = region;

        let d = at(x1, y1);
        let (a, b, c) = match (x0 >= 1, y0 >= 1) {
            (true, true) => (at(x0 - 1, y0 - 1), at(x1, y0 - 1), at(x0 - 1, y1)),
            (true, false) => (zero, zero, at(x0 - 1, y1)),
            (false, true) => (zero, at(x1, y0 - 1), zero),
            (false, false) => (zero, zero, zero),
        };

        // D - B - C can dip below zero before A is added back.
        d.wrapping_sub(b).wrapping_sub(c).wrapping_add(a)
    }
}
