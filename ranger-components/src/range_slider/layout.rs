use ranger_ui::{Color, Px};

use super::{Bound, LabelPosition, RANGE_SEPARATOR, mapper::CoordinateMapper, model::Span};
use crate::style::RangeSliderStyle;

/// A horizontal run along the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrackSegment {
    pub x: Px,
    pub width: Px,
}

/// Geometry and fill of one handle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandleFrame {
    /// Offset of the handle's center from the track origin.
    pub center: Px,
    /// Left edge: `center - width / 2`.
    pub x: Px,
    pub width: Px,
    pub height: Px,
    pub color: Color,
    pub dragging: bool,
}

/// Text and color of one bound label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabelFrame {
    pub text: String,
    pub color: Color,
}

/// Optional caption shown above or below the track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaptionFrame {
    pub text: String,
    pub position: LabelPosition,
}

/// Everything a renderer needs to paint one slider pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SliderFrame {
    pub track: TrackSegment,
    /// Selected run between the two handle centers.
    pub highlight: TrackSegment,
    pub track_height: Px,
    pub track_color: Color,
    pub highlight_color: Color,
    pub lower_handle: HandleFrame,
    pub upper_handle: HandleFrame,
    pub lower_label: LabelFrame,
    pub upper_label: LabelFrame,
    pub separator: &'static str,
    pub caption: Option<CaptionFrame>,
    pub font_size: Px,
}

impl SliderFrame {
    pub fn lower_offset(&self) -> Px {
        self.lower_handle.center
    }

    pub fn upper_offset(&self) -> Px {
        self.upper_handle.center
    }

    pub fn handle(&self, bound: Bound) -> &HandleFrame {
        match bound {
            Bound::Lower => &self.lower_handle,
            Bound::Upper => &self.upper_handle,
        }
    }

    pub fn label(&self, bound: Bound) -> &LabelFrame {
        match bound {
            Bound::Lower => &self.lower_label,
            Bound::Upper => &self.upper_label,
        }
    }

    /// `"lower - upper"`, the combined value readout.
    pub fn value_text(&self) -> String {
        format!(
            "{}{}{}",
            self.lower_label.text, self.separator, self.upper_label.text
        )
    }
}

/// Per-pass inputs for [`slider_frame`].
pub(super) struct FrameInputs<'a> {
    pub span: Span,
    pub mapper: &'a CoordinateMapper,
    pub track_width: Px,
    pub scale_factor: f64,
    pub style: &'a RangeSliderStyle,
    pub disabled: bool,
    pub dragging: Option<Bound>,
    pub labels: (String, String),
    pub caption: Option<CaptionFrame>,
}

pub(super) fn slider_frame(inputs: FrameInputs<'_>) -> SliderFrame {
    let FrameInputs {
        span,
        mapper,
        track_width,
        scale_factor,
        style,
        disabled,
        dragging,
        labels: (lower_text, upper_text),
        caption,
    } = inputs;

    let width = Px(track_width.0.max(0));
    let lower_center =
        Px::saturating_from_f64(mapper.value_to_offset(span.lower, width.to_f64()));
    let upper_center =
        Px::saturating_from_f64(mapper.value_to_offset(span.upper, width.to_f64()));

    let handle_width = style.handle_width.to_px(scale_factor);
    let handle_height = style.handle_height.to_px(scale_factor);
    let handle_color = if disabled {
        style.disabled_handle_color
    } else {
        style.handle_color
    };
    let handle = |center: Px, bound: Bound| HandleFrame {
        center,
        x: center - handle_width / 2,
        width: handle_width,
        height: handle_height,
        color: handle_color,
        dragging: dragging == Some(bound),
    };

    let coincide = span.lower == span.upper;
    let label_color = |bound: Bound| {
        if disabled {
            style.disabled_color
        } else if dragging == Some(bound) {
            style.dragging_color
        } else if coincide {
            style.match_color
        } else {
            style.value_color
        }
    };

    SliderFrame {
        track: TrackSegment { x: Px::ZERO, width },
        highlight: TrackSegment {
            x: lower_center,
            width: Px((upper_center.0 - lower_center.0).max(0)),
        },
        track_height: style.track_height.to_px(scale_factor),
        track_color: style.track_color,
        highlight_color: style.selected_color,
        lower_handle: handle(lower_center, Bound::Lower),
        upper_handle: handle(upper_center, Bound::Upper),
        lower_label: LabelFrame {
            text: lower_text,
            color: label_color(Bound::Lower),
        },
        upper_label: LabelFrame {
            text: upper_text,
            color: label_color(Bound::Upper),
        },
        separator: RANGE_SEPARATOR,
        caption,
        font_size: style.value_font_size.to_px(scale_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(
        mapper: &'a CoordinateMapper,
        style: &'a RangeSliderStyle,
        span: Span,
    ) -> FrameInputs<'a> {
        FrameInputs {
            span,
            mapper,
            track_width: Px(300),
            scale_factor: 1.0,
            style,
            disabled: false,
            dragging: None,
            labels: ("20".into(), "80".into()),
            caption: None,
        }
    }

    #[test]
    fn offsets_and_highlight() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let style = RangeSliderStyle::default();
        let frame = slider_frame(inputs(&mapper, &style, Span::new(20.0, 80.0)));

        assert_eq!(frame.lower_offset(), Px(60));
        assert_eq!(frame.upper_offset(), Px(240));
        assert_eq!(
            frame.highlight,
            TrackSegment {
                x: Px(60),
                width: Px(180)
            }
        );
        assert_eq!(frame.track.width, Px(300));
        assert_eq!(frame.lower_handle.x, Px(49));
        assert_eq!(frame.lower_handle.width, Px(22));
        assert_eq!(frame.value_text(), "20 - 80");
        assert_eq!(frame.lower_label.color, style.value_color);
    }

    #[test]
    fn label_colors_follow_lookup_order() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let style = RangeSliderStyle::default();

        let mut dragging = inputs(&mapper, &style, Span::new(50.0, 50.0));
        dragging.dragging = Some(Bound::Upper);
        let frame = slider_frame(dragging);
        assert_eq!(frame.upper_label.color, style.dragging_color);
        assert_eq!(frame.lower_label.color, style.match_color);
        assert!(frame.upper_handle.dragging);
        assert_eq!(frame.highlight.width, Px(0));

        let mut disabled = inputs(&mapper, &style, Span::new(50.0, 50.0));
        disabled.disabled = true;
        let frame = slider_frame(disabled);
        assert_eq!(frame.lower_label.color, style.disabled_color);
        assert_eq!(frame.lower_handle.color, style.disabled_handle_color);
    }

    #[test]
    fn zero_width_track_collapses_to_origin() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let style = RangeSliderStyle::default();
        let mut zero = inputs(&mapper, &style, Span::new(20.0, 80.0));
        zero.track_width = Px(-10);
        let frame = slider_frame(zero);

        assert_eq!(frame.track.width, Px(0));
        assert_eq!(frame.lower_offset(), Px(0));
        assert_eq!(frame.upper_offset(), Px(0));
    }

    #[test]
    fn sizes_scale_with_density() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let style = RangeSliderStyle::default();
        let mut hidpi = inputs(&mapper, &style, Span::new(0.0, 100.0));
        hidpi.scale_factor = 2.0;
        let frame = slider_frame(hidpi);

        assert_eq!(frame.track_height, Px(6));
        assert_eq!(frame.upper_handle.width, Px(44));
        assert_eq!(frame.font_size, Px(28));
    }
}
