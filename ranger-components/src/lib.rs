//! # Ranger Components
//!
//! The range slider component for `ranger-ui` hosts.
//!
//! [`range_slider::RangeSlider`] selects a closed sub-range inside fixed
//! limits. It maps pointer gestures to values, snaps and rounds them,
//! reports every committed change, and produces a
//! [`range_slider::SliderFrame`] describing what to paint.

pub mod range_slider;
pub mod style;
pub mod value;

pub use crate::{
    range_slider::{
        Bound, DragBoundary, LabelPosition, RangeChange, RangeSlider, RangeSliderArgs,
        RangeSliderError, SliderFrame,
    },
    style::{ColorScheme, RangeSliderStyle},
    value::SliderValue,
};
