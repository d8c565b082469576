use super::Bound;

/// Decimal digits beyond which `10^precision` stops being exact in `f64`.
pub const MAX_PRECISION: u32 = 15;

/// A selected `[lower, upper]` pair in the slider's computation domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lower: f64,
    pub upper: f64,
}

impl Span {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn get(&self, bound: Bound) -> f64 {
        match bound {
            Bound::Lower => self.lower,
            Bound::Upper => self.upper,
        }
    }
}

/// Quantize, round and order policy applied to every candidate bound.
///
/// Pure: it never stores the selected range, it only turns the current
/// range plus a candidate into the next range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeModel {
    min: f64,
    max: f64,
    step: f64,
    precision: u32,
}

impl RangeModel {
    /// Callers validate `min < max`, `step > 0` and
    /// `precision <= MAX_PRECISION` beforehand.
    pub(crate) fn new(min: f64, max: f64, step: f64, precision: u32) -> Self {
        Self {
            min,
            max,
            step,
            precision: precision.min(MAX_PRECISION),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Snaps to the nearest `min + k * step`, ties away from zero.
    ///
    /// `k` never exceeds the last whole stride inside the limits.
    pub fn quantize(&self, candidate: f64) -> f64 {
        if candidate.is_nan() {
            return self.min;
        }
        let last_stride = ((self.max - self.min) / self.step + 1e-9).floor();
        let k = ((candidate - self.min) / self.step).round().clamp(0.0, last_stride);
        self.min + k * self.step
    }

    /// Rounds to `precision` decimal digits.
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.precision)
    }

    /// Clamps a host-supplied span into the limits and restores ordering.
    pub fn normalize(&self, span: Span) -> Span {
        let lower = clamp_or_min(span.lower, self.min, self.max);
        let upper = clamp_or_min(span.upper, self.min, self.max);
        if lower <= upper {
            Span::new(lower, upper)
        } else {
            Span::new(upper, lower)
        }
    }

    /// Returns `true` if the span satisfies `min <= lower <= upper <= max`.
    pub fn contains(&self, span: Span) -> bool {
        self.min <= span.lower && span.lower <= span.upper && span.upper <= self.max
    }

    /// Next span after moving the lower bound toward `candidate`, or `None`
    /// when the committed value would equal the current one or the
    /// candidate is NaN.
    ///
    /// The lower bound never passes the current upper bound.
    pub fn commit_lower(&self, current: Span, candidate: f64) -> Option<Span> {
        if candidate.is_nan() {
            return None;
        }
        let lower = self
            .settle(candidate)
            .clamp(self.min, current.upper.max(self.min));
        self.moves(current.lower, lower)
            .then_some(Span::new(lower, current.upper))
    }

    /// Next span after moving the upper bound toward `candidate`, or `None`
    /// when the committed value would equal the current one or the
    /// candidate is NaN.
    ///
    /// The upper bound never passes the current lower bound.
    pub fn commit_upper(&self, current: Span, candidate: f64) -> Option<Span> {
        if candidate.is_nan() {
            return None;
        }
        let upper = self
            .settle(candidate)
            .clamp(current.lower.min(self.max), self.max);
        self.moves(current.upper, upper)
            .then_some(Span::new(current.lower, upper))
    }

    pub fn commit(&self, bound: Bound, current: Span, candidate: f64) -> Option<Span> {
        match bound {
            Bound::Lower => self.commit_lower(current, candidate),
            Bound::Upper => self.commit_upper(current, candidate),
        }
    }

    fn settle(&self, value: f64) -> f64 {
        self.round(self.quantize(value))
    }

    /// An off-grid host bound counts as sitting on the grid point it
    /// settles to.
    fn moves(&self, current: f64, next: f64) -> bool {
        next != current && next != self.settle(current)
    }
}

/// `round(value * 10^precision) / 10^precision`, ties away from zero.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
