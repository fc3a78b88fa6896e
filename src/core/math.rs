// Fixed-point math used by the simulation
//
// Positions and velocities are signed 10.6 fixed-point values: 6 fractional
// bits, so one pixel is 64 units and the smallest step is 1/64 px.

use fixed::types::I10F6;
use glam::IVec2;
use std::ops::{Add, AddAssign};

/// Fixed-point scalar used for all character motion
pub type Fix16 = I10F6;

/// Convert a decimal constant to fixed-point, truncating toward zero
///
/// Tuning constants are authored as decimals; truncation (not rounding) keeps
/// e.g. `2.4` at `153/64` rather than `154/64`.
pub fn fix16(value: f32) -> Fix16 {
    let scale = (1u32 << Fix16::FRAC_NBITS) as f32;
    Fix16::from_bits((value * scale) as i16)
}

/// Convert a fixed-point value to whole pixels
///
/// Drops the fractional bits, which rounds toward negative infinity:
/// `-0.8` becomes `-1`, `0.8` becomes `0`.
#[inline]
pub fn to_pixels(value: Fix16) -> i32 {
    value.to_num::<i32>()
}

/// 2D vector of fixed-point scalars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixVec2 {
    pub x: Fix16,
    pub y: Fix16,
}

impl FixVec2 {
    pub const ZERO: Self = Self {
        x: Fix16::ZERO,
        y: Fix16::ZERO,
    };

    pub fn new(x: Fix16, y: Fix16) -> Self {
        Self { x, y }
    }

    /// Build a vector from whole pixel values
    pub fn from_pixels(x: i16, y: i16) -> Self {
        Self {
            x: Fix16::from_num(x),
            y: Fix16::from_num(y),
        }
    }

    /// Integer pixel coordinates of this vector
    pub fn to_pixels(self) -> IVec2 {
        IVec2::new(to_pixels(self.x), to_pixels(self.y))
    }
}

impl Add for FixVec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for FixVec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fix16_truncates_toward_zero() {
        assert_eq!(fix16(0.8).to_bits(), 51);
        assert_eq!(fix16(-0.8).to_bits(), -51);
        assert_eq!(fix16(2.4).to_bits(), 153);
        assert_eq!(fix16(-5.8).to_bits(), -371);
        assert_eq!(fix16(190.0).to_bits(), 190 * 64);
    }

    #[test]
    fn test_fix16_value() {
        assert_relative_eq!(fix16(0.5).to_num::<f32>(), 0.5);
        assert_relative_eq!(fix16(0.2).to_num::<f32>(), 0.1875);
    }

    #[test]
    fn test_to_pixels_floors() {
        assert_eq!(to_pixels(fix16(0.8)), 0);
        assert_eq!(to_pixels(fix16(-0.8)), -1);
        assert_eq!(to_pixels(fix16(1.6)), 1);
        assert_eq!(to_pixels(fix16(-4.0)), -4);
    }

    #[test]
    fn test_vector_add() {
        let a = FixVec2::from_pixels(8, 180);
        let b = FixVec2::new(fix16(0.5), fix16(-1.0));
        let sum = a + b;
        assert_eq!(sum.to_pixels(), IVec2::new(8, 179));

        let mut c = FixVec2::ZERO;
        c += b;
        assert_eq!(c, b);
    }
}
