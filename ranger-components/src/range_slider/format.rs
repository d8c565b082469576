use ranger_ui::CallbackWith;

use super::model::round_to;
use crate::value::SliderValue;

/// Renders bound values as label text.
///
/// A caller-supplied description wins when it returns non-empty text;
/// otherwise the value is printed with exactly `precision` decimals, or as
/// a whole number (rounded, not truncated) when `precision` is zero.
#[derive(Clone)]
pub struct ValueFormatter<T: SliderValue> {
    precision: u32,
    describe: Option<CallbackWith<T, Option<String>>>,
}

impl<T: SliderValue> ValueFormatter<T> {
    pub fn new(precision: u32, describe: Option<CallbackWith<T, Option<String>>>) -> Self {
        Self {
            precision,
            describe,
        }
    }

    pub fn format(&self, value: T) -> String {
        if let Some(text) = self
            .describe
            .as_ref()
            .and_then(|describe| describe.call(value))
            .filter(|text| !text.is_empty())
        {
            return text;
        }
        format_number(value.into_f64(), self.precision)
    }
}

/// Fixed-point rendering with the same rounding the slider commits with.
pub fn format_number(value: f64, precision: u32) -> String {
    let rounded = round_to(value, precision);
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", precision as usize, rounded)
}
