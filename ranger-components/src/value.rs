//! Numeric types a range slider can be bound to.
//!
//! Sliders compute in `f64`; [`SliderValue`] converts at the boundary.
//! Integer types round half away from zero and saturate at their bounds when
//! converting back, so one slider implementation serves both domains.

use std::fmt::Debug;

use num_traits::{Bounded, NumCast, ToPrimitive};

/// A value type usable as the bound value of a range slider.
pub trait SliderValue:
    Copy + PartialOrd + Debug + NumCast + ToPrimitive + Bounded + Send + Sync + 'static
{
    /// `true` for integer types; forces an effective precision of zero.
    const INTEGRAL: bool;

    /// Widens to `f64`. Values with no `f64` representation become NaN.
    fn into_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Narrows from `f64`, rounding for integer types and saturating at the
    /// type's bounds. NaN narrows to zero.
    fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return <Self as NumCast>::from(0.0).unwrap_or_else(Self::min_value);
        }
        let value = if Self::INTEGRAL { value.round() } else { value };
        <Self as NumCast>::from(value).unwrap_or_else(|| {
            if value < 0.0 {
                Self::min_value()
            } else {
                Self::max_value()
            }
        })
    }
}

macro_rules! impl_slider_value {
    ($integral:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl SliderValue for $ty {
                const INTEGRAL: bool = $integral;
            }
        )+
    };
}

impl_slider_value!(false => f32, f64);
impl_slider_value!(true => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
