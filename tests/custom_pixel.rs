use anyhow::Result;
use pixel_sum::{Accumulator, Pixel, PixelSum};

/// Four-bit sample accumulated into a 16-bit sum, narrower than any built-in
/// accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Nibble(u8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Sum16(u16);

impl From<u8> for Sum16 {
    fn from(val: u8) -> Self {
        Self(u16::from(val))
    }
}

impl Accumulator for Sum16 {
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    fn to_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Pixel for Nibble {
    type Sum = Sum16;

    fn widen(self) -> Sum16 {
        Sum16(u16::from(self.0 & 0x0f))
    }

    fn is_nonzero(self) -> bool {
        self.0 & 0x0f > 0
    }
}

/// Sample whose sums are kept modulo 1000. The accumulator has the size of a
/// `u32` without behaving like one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Digit(u8);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
struct Mod1000(u32);

impl From<u8> for Mod1000 {
    fn from(val: u8) -> Self {
        Self(u32::from(val) % 1000)
    }
}

impl Accumulator for Mod1000 {
    fn wrapping_add(self, rhs: Self) -> Self {
        Self((self.0 + rhs.0) % 1000)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        Self((self.0 + 1000 - rhs.0) % 1000)
    }

    fn to_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Pixel for Digit {
    type Sum = Mod1000;

    fn widen(self) -> Mod1000 {
        Mod1000::from(self.0)
    }

    fn is_nonzero(self) -> bool {
        self.0 > 0
    }
}

#[test]
fn narrow_accumulator_builds() -> Result<()> {
    let pixels = [Nibble(1), Nibble(2), Nibble(3), Nibble(4)];
    let pixel_sum = PixelSum::<Nibble>::new(&pixels, 2, 2)?;

    assert_eq!(pixel_sum.sum(0, 0, 1, 1), Sum16(10));
    assert_eq!(pixel_sum.sum(1, 1, 1, 0), Sum16(6));
    assert_eq!(pixel_sum.non_zero_count(0, 0, 1, 1), Sum16(4));
    Ok(())
}

#[test]
fn narrow_accumulator_wide_grid() -> Result<()> {
    // Rows wide enough to span several vector lanes.
    let width = 37;
    let height = 5;
    let pixels: Vec<Nibble> = (0..width * height)
        .map(|i| Nibble((i % 16) as u8))
        .collect();
    let pixel_sum = PixelSum::<Nibble>::new(&pixels, width, height)?;

    let total: u16 = pixels.iter().map(|p| u16::from(p.0)).sum();
    let nonzero = pixels.iter().filter(|p| p.0 > 0).count() as u16;
    assert_eq!(pixel_sum.sum(0, 0, 36, 4), Sum16(total));
    assert_eq!(pixel_sum.non_zero_count(0, 0, 36, 4), Sum16(nonzero));
    Ok(())
}

#[test]
fn accumulator_arithmetic_is_respected() -> Result<()> {
    let width = 20;
    let height = 20;
    let pixels = vec![Digit(7); width * height];
    let pixel_sum = PixelSum::<Digit>::new(&pixels, width, height)?;

    // 7 * 400 = 2800, kept modulo 1000.
    assert_eq!(pixel_sum.sum(0, 0, 19, 19), Mod1000(800));
    // 7 * 19 * 19 = 2527
    assert_eq!(pixel_sum.sum(1, 1, 19, 19), Mod1000(527));
    // 400 non-zero cells
    assert_eq!(pixel_sum.non_zero_count(0, 0, 19, 19), Mod1000(400));
    Ok(())
}
