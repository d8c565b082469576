/// Maps between domain values and pixel offsets along a track.
///
/// Offsets are measured from the track origin. Every division is guarded:
/// a track of zero (or non-finite) width, or collapsed limits, maps every
/// value to offset `0` and every offset to `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    min: f64,
    max: f64,
}

impl CoordinateMapper {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn span(&self) -> Option<f64> {
        let span = self.max - self.min;
        (span.is_finite() && span > 0.0).then_some(span)
    }

    /// Offset of `value` along a track `track_width` pixels wide.
    ///
    /// Values outside the limits are clamped first, so the result always
    /// lies in `[0, track_width]`.
    pub fn value_to_offset(&self, value: f64, track_width: f64) -> f64 {
        let Some(span) = self.span() else {
            return 0.0;
        };
        if !usable_width(track_width) || value.is_nan() {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        ((value - self.min) / span * track_width).clamp(0.0, track_width)
    }

    /// Domain value at `offset` along a track `track_width` pixels wide.
    ///
    /// Offsets outside the track are clamped to its ends.
    pub fn offset_to_value(&self, offset: f64, track_width: f64) -> f64 {
        let Some(span) = self.span() else {
            return self.min;
        };
        if !usable_width(track_width) || offset.is_nan() {
            return self.min;
        }
        let offset = offset.clamp(0.0, track_width);
        (self.min + offset / track_width * span).clamp(self.min, self.max)
    }
}

fn usable_width(track_width: f64) -> bool {
    track_width.is_finite() && track_width > 0.0
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(50.0, 150.0)]
    #[case(100.0, 300.0)]
    #[case(-10.0, 0.0)]
    #[case(250.0, 300.0)]
    fn value_to_offset_clamps(#[case] value: f64, #[case] offset: f64) {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        assert_eq!(mapper.value_to_offset(value, 300.0), offset);
    }

    #[test]
    fn offset_to_value_respects_nonzero_min() {
        let mapper = CoordinateMapper::new(1.0, 10.0);
        assert_eq!(mapper.offset_to_value(0.0, 90.0), 1.0);
        assert_eq!(mapper.offset_to_value(90.0, 90.0), 10.0);
        assert!((mapper.offset_to_value(24.0, 90.0) - 3.4).abs() < 1e-12);
        assert_eq!(mapper.offset_to_value(-5.0, 90.0), 1.0);
        assert_eq!(mapper.offset_to_value(500.0, 90.0), 10.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-20.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn degenerate_width_falls_back(#[case] width: f64) {
        let mapper = CoordinateMapper::new(-5.0, 5.0);
        assert_eq!(mapper.value_to_offset(3.0, width), 0.0);
        assert_eq!(mapper.offset_to_value(3.0, width), -5.0);
    }

    #[test]
    fn collapsed_limits_fall_back() {
        let mapper = CoordinateMapper::new(7.0, 7.0);
        assert_eq!(mapper.value_to_offset(7.0, 100.0), 0.0);
        assert_eq!(mapper.offset_to_value(50.0, 100.0), 7.0);
    }

    #[test]
    fn negative_limits_map_from_min() {
        let mapper = CoordinateMapper::new(-50.0, 50.0);
        assert_eq!(mapper.value_to_offset(-50.0, 200.0), 0.0);
        assert_eq!(mapper.value_to_offset(0.0, 200.0), 100.0);
        assert_eq!(mapper.offset_to_value(50.0, 200.0), -25.0);
    }

    proptest! {
        #[test]
        fn offset_round_trip(
            min in -1.0e6f64..1.0e6,
            span in 1.0e-3f64..1.0e6,
            width in 1.0f64..10_000.0,
            fraction in 0.0f64..=1.0,
        ) {
            let mapper = CoordinateMapper::new(min, min + span);
            let offset = fraction * width;
            let back = mapper.value_to_offset(mapper.offset_to_value(offset, width), width);
            prop_assert!((back - offset).abs() <= 1e-6 * width.max(1.0));
        }
    }
}
