
use std::fmt::Debug;

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(cpuid_avx2, "avx2");

#[cfg(target_arch = "x86_64")]
pub use cpuid_avx2::get as has_avx2;

/// An input sample type, paired at compile time with an accumulator wide
/// enough to hold the sum of a full `MAX_WIDTH` x `MAX_HEIGHT` grid of its
/// maximum value.
pub trait Pixel: Clone + Copy + Default + Debug + PartialOrd + Ord + PartialEq + Eq {
    type Sum: Accumulator;

    /// Converts the sample to its accumulator type without loss.
    #[must_use]
    fn widen(self) -> Self::Sum;

    #[must_use]
    fn is_nonzero(self) -> bool;
}

/// Unsigned integer type used for the cumulative tables.
///
/// Table construction and rectangle extraction both go through intermediate
/// values that may leave the type's range before coming back into it, so the
/// arithmetic here is modular.
pub trait Accumulator:
    Clone + Copy + Default + Debug + PartialOrd + Ord + PartialEq + Eq + From<u8>
{
    #[must_use]
    fn wrapping_add(self, rhs: Self) -> Self;

    #[must_use]
    fn wrapping_sub(self, rhs: Self) -> Self;

    #[must_use]
    fn to_f64(self) -> f64;

    /// Adds `above` into `row` element by element. Only the common prefix of
    /// the two slices is touched.
    fn add_row(row: &mut [Self], above: &[Self]) {
        for (cur, &up) in row.iter_mut().zip(above) {
            *cur = cur.wrapping_add(up);
        }
    }

    /// Same as [`Accumulator::add_row`], vectorized where the type allows it.
    /// Other types keep the scalar loop.
    ///
    /// # Safety
    /// The CPU must support AVX2.
    #[cfg(target_arch = "x86_64")]
    #[doc(hidden)]
    unsafe fn add_row_avx2(row: &mut [Self], above: &[Self]) {
        Self::add_row(row, above);
    }
}

macro_rules! impl_pixel {
    ($pixel:ty => $sum:ty) => {
        impl Pixel for $pixel {
            type Sum = $sum;

            fn widen(self) -> $sum {
                <$sum>::from(self)
            }

            fn is_nonzero(self) -> bool {
                self > 0
            }
        }
    };
}

macro_rules! impl_accumulator {
    ($($sum:ty => $kernel:ident),*) => {
        $(
            impl Accumulator for $sum {
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$sum>::wrapping_add(self, rhs)
                }

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$sum>::wrapping_sub(self, rhs)
                }

                #[allow(clippy::cast_precision_loss)]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[cfg(target_arch = "x86_64")]
                unsafe fn add_row_avx2(row: &mut [Self], above: &[Self]) {
                    crate::integral::avx2::$kernel(row, above);
                }
            }
        )*
    };
}

// 4096 * 4096 * 255 still fits in a u32, 4096 * 4096 * 65535 needs a u64.
impl_pixel!(u8 => u32);
impl_pixel!(u16 => u64);
impl_accumulator!(u32 => add_row_u32, u64 => add_row_u64);
