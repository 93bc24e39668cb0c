
use std::{fmt, num::NonZeroUsize};

use anyhow::{Result, bail};

pub const MAX_WIDTH: usize = 4096;
pub const MAX_HEIGHT: usize = 4096;

/// Errors raised while building a [`PixelSum`](crate::PixelSum).
///
/// Construction returns `anyhow::Result`; the underlying error can be
/// recovered with `err.downcast_ref::<PixelSumError>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelSumError {
    /// Width or height is zero, negative or above its maximum.
    DimensionOutOfBounds { width: i64, height: i64 },
    /// The buffer holds fewer samples than `width * height`.
    BufferTooSmall { expected: usize, actual: usize },
}

impl fmt::Display for PixelSumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOutOfBounds { width, height } => write!(
                f,
                "Dimension is out of bound: {width}x{height}, must be within 1x1 and {MAX_WIDTH}x{MAX_HEIGHT}"
            ),
            Self::BufferTooSmall { expected, actual } => write!(
                f,
                "Buffer is too small: expected {expected} samples, got {actual}"
            ),
        }
    }
}

impl std::error::Error for PixelSumError {}

/// Grid dimensions that are known to be within `1..=MAX_WIDTH` and
/// `1..=MAX_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: NonZeroUsize,
    height: NonZeroUsize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let out_of_bounds = || PixelSumError::DimensionOutOfBounds {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        };

        let (Some(nz_width), Some(nz_height)) = (NonZeroUsize::new(width), NonZeroUsize::new(height))
        else {
            log_event!(WARN, width, height, "rejected empty grid");
            bail!(out_of_bounds());
        };
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            log_event!(WARN, width, height, "rejected oversized grid");
            bail!(out_of_bounds());
        }

        Ok(Self {
            width: nz_width,
            height: nz_height,
        })
    }

    #[must_use]
    pub fn width(self) -> NonZeroUsize {
        self.width
    }

    #[must_use]
    pub fn height(self) -> NonZeroUsize {
        self.height
    }

    /// Number of samples in the grid.
    #[must_use]
    pub fn sample_count(self) -> usize {
        self.width.get() * self.height.get()
    }
}

impl TryFrom<(i64, i64)> for Dimensions {
    type Error = anyhow::Error;

    fn try_from((width, height): (i64, i64)) -> Result<Self> {
        match (usize::try_from(width), usize::try_from(height)) {
            (Ok(width), Ok(height)) => Self::new(width, height),
            _ => {
                log_event!(WARN, width, height, "rejected negative dimensions");
                bail!(PixelSumError::DimensionOutOfBounds { width, height })
            }
        }
    }
}
