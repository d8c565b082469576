//! Physical pixel values.
//!
//! Physical pixels correspond directly to screen pixels. Layout passes hand
//! track widths to components as [`Px`], and components hand handle and
//! segment geometry back to the renderer as [`Px`].
//!
//! # Example
//!
//! ```
//! use ranger_ui::px::Px;
//!
//! let handle = Px(22);
//! assert_eq!(Px(60) - handle / 2, Px(49));
//!
//! // Floating point geometry is rounded and saturated when converted back.
//! assert_eq!(Px::saturating_from_f64(149.6), Px(150));
//! assert_eq!(Px::saturating_from_f64(f64::MAX), Px(i32::MAX));
//! ```

use std::ops::{Div, Sub};

/// A physical pixel coordinate value.
///
/// Supports negative values so that geometry placed left of a track origin
/// (for example the left edge of a handle sitting on offset zero) stays
/// representable.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Rounds to the nearest pixel and saturates at the i32 range.
    ///
    /// NaN maps to [`Px::ZERO`].
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Px::ZERO;
        }
        let clamped = value.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX));
        Px(clamped as i32)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0.saturating_sub(rhs.0))
    }
}

impl Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_arithmetic() {
        assert_eq!(Px(10) - Px(5), Px(5));
        assert_eq!(Px(5) - Px(11), Px(-6));
        assert_eq!(Px(23) / 2, Px(11));
        assert_eq!(Px(i32::MIN) - Px(1), Px(i32::MIN));
    }

    #[test]
    fn test_saturating_from_f64() {
        assert_eq!(Px::saturating_from_f64(f64::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f64(f64::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f64(100.5), Px(101));
        assert_eq!(Px::saturating_from_f64(-100.5), Px(-101));
        assert_eq!(Px::saturating_from_f64(f64::NAN), Px::ZERO);
    }

    #[test]
    fn raw_and_float_views_agree() {
        assert_eq!(Px(-7).raw(), -7);
        assert_eq!(Px(-7).to_f64(), -7.0);
    }
}
