//! # Density-Independent Pixels (Dp)
//!
//! Style tables describe sizes in [`Dp`] so a single table works on every
//! display density. The conversion to physical pixels takes the scale factor
//! of the surface being painted, which the host supplies per layout pass.
//!
//! ```
//! use ranger_ui::{Dp, Px};
//!
//! let handle = Dp(22.0);
//! assert_eq!(handle.to_px(1.0), Px(22));
//! assert_eq!(handle.to_px(2.0), Px(44));
//! ```

use crate::Px;

/// A density-independent length.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f64);

impl Dp {
    /// Converts to physical pixels, rounding to the nearest pixel.
    ///
    /// Non-positive or non-finite scale factors are treated as `1.0`.
    pub fn to_px(self, scale_factor: f64) -> Px {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Px::saturating_from_f64(self.0 * scale)
    }
}
