//! Constant-time rectangle aggregates over a fixed grid of pixel intensities.
//!
//! [`PixelSum`] copies a row-major buffer once, builds summed-area tables for
//! the raw values and for their non-zero flags, and then answers sum, average,
//! non-zero count and non-zero average queries for any axis-aligned rectangle
//! in O(1).
//!
//! ```rust
//! use pixel_sum::PixelSumU8;
//!
//! let pixels = [0u8, 4, 0, 2, 1, 0];
//! let pixel_sum = PixelSumU8::new(&pixels, 6, 1)?;
//!
//! assert_eq!(pixel_sum.sum(0, 0, 5, 0), 7);
//! assert_eq!(pixel_sum.non_zero_count(5, 0, 0, 0), 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

// Performance
#![warn(clippy::imprecise_flops)]
#![warn(clippy::inline_always)]
#![warn(clippy::large_types_passed_by_value)]
#![warn(clippy::needless_collect)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_clone)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::trivially_copy_pass_by_ref)]
// Readability/Code Intention
#![warn(clippy::checked_conversions)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::enum_glob_use)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::invalid_upcast_comparisons)]
#![warn(clippy::macro_use_imports)]
#![warn(clippy::manual_assert)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::match_bool)]
#![warn(clippy::mod_module_files)]
#![warn(clippy::range_minus_one)]
#![warn(clippy::range_plus_one)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::tests_outside_test_module)]
// Correctness/Safety
#![deny(clippy::cfg_not_test)]
#![warn(clippy::dbg_macro)]
#![deny(clippy::debug_assert_with_mut_call)]
#![warn(clippy::large_stack_arrays)]
#![warn(clippy::mixed_read_write_in_expression)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unwrap_used)]
// Annoyances
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]
#![allow(unsafe_op_in_unsafe_fn)]

#[macro_use]
mod macros;


#[cfg(feature = "bench")]
pub mod integral;
#[cfg(feature = "bench")]
pub mod params;
#[cfg(feature = "bench")]
pub mod rect;
#[cfg(feature = "bench")]
pub mod util;

#[cfg(not(feature = "bench"))]
mod integral;
#[cfg(not(feature = "bench"))]
mod params;
#[cfg(not(feature = "bench"))]
mod rect;
#[cfg(not(feature = "bench"))]
mod util;

mod pixel_sum;

pub use params::{Dimensions, MAX_HEIGHT, MAX_WIDTH, PixelSumError};
pub use pixel_sum::{PixelSum, PixelSumU8, PixelSumU16};
pub use util::{Accumulator, Pixel};
