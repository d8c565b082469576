//! A two-handle slider for selecting a closed sub-range inside fixed limits.
//!
//! ## Usage
//!
//! The host owns the selected range and passes it in on every call; the
//! slider maps pointer gestures to candidate values, snaps them to `step`,
//! rounds them to `precision`, keeps the handles ordered, and reports every
//! change through `on_value_changed`. [`RangeSlider::frame`] turns the
//! current range into geometry and label text for the renderer.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use ranger_components::range_slider::{Bound, RangeSlider, RangeSliderArgs};
//! use ranger_ui::{GestureEvent, PointerId, Px};
//!
//! let changes = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&changes);
//! let mut slider = RangeSlider::new(
//!     RangeSliderArgs::<f64>::default()
//!         .limits(0.0..=100.0)
//!         .on_value_changed(move |bound, range| log.lock().unwrap().push((bound, range))),
//! )
//! .unwrap();
//!
//! // 200px track: the lower handle sits at 40px.
//! let range = 20.0..=80.0;
//! slider.handle_gesture(&range, GestureEvent::began(PointerId::MOUSE, 40.0), Px(200));
//! let change = slider
//!     .handle_gesture(&range, GestureEvent::changed(PointerId::MOUSE, 61.0), Px(200))
//!     .unwrap();
//!
//! assert_eq!(change.range, 31.0..=80.0);
//! assert_eq!(changes.lock().unwrap()[0], (Bound::Lower, 31.0..=80.0));
//! assert_eq!(slider.frame(&change.range, Px(200), 1.0).value_text(), "31 - 80");
//! ```
use std::{fmt, ops::RangeInclusive};

use derive_setters::Setters;
use ranger_ui::{Binding, CallbackWith, GestureEvent, Px};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{style::RangeSliderStyle, value::SliderValue};

use interaction::DragContext;
use layout::{FrameInputs, slider_frame};

pub use format::{ValueFormatter, format_number};
pub use interaction::{DragController, DragState};
pub use layout::{CaptionFrame, HandleFrame, LabelFrame, SliderFrame, TrackSegment};
pub use mapper::CoordinateMapper;
pub use model::{MAX_PRECISION, RangeModel, Span, round_to};

mod format;
mod interaction;
mod layout;
mod mapper;
mod model;

/// Text placed between the two bound labels.
pub const RANGE_SEPARATOR: &str = " - ";
/// Pointer travel, in pixels, before a press turns into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 1.0;

/// Which end of the selected range a change refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bound {
    Lower,
    Upper,
}

/// Where the optional caption sits relative to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelPosition {
    #[default]
    Top,
    Bottom,
}

/// What a drag does when the pointer leaves the handle's allowed run,
/// i.e. passes the other handle or the end of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragBoundary {
    /// Ignore the update; the handle stays where it was.
    #[default]
    Reject,
    /// Clamp the pointer into the allowed run; the handle stops at the edge.
    Pin,
}

/// Invalid slider configuration or host-supplied range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeSliderError {
    #[error("invalid limits {min}..={max}: bounds must be finite with min < max")]
    InvalidLimits { min: f64, max: f64 },
    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("precision {0} exceeds the supported {max} decimal digits", max = MAX_PRECISION)]
    PrecisionTooLarge(u32),
    #[error("drag threshold must be finite and non-negative, got {0}")]
    InvalidDragThreshold(f64),
    #[error("range {lower}..={upper} is inverted or outside limits {min}..={max}")]
    RangeOutOfLimits {
        lower: f64,
        upper: f64,
        min: f64,
        max: f64,
    },
}

/// A committed change of one bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeChange<T> {
    pub bound: Bound,
    pub range: RangeInclusive<T>,
}

/// Changes produced by one batch of gesture events.
pub type RangeChanges<T> = SmallVec<[RangeChange<T>; 4]>;

/// Arguments for [`RangeSlider`].
#[derive(Clone, Setters)]
pub struct RangeSliderArgs<T: SliderValue = f64> {
    /// The selectable domain. `start < end` is required.
    pub limits: RangeInclusive<T>,
    /// Every committed value is `limits.start + k * step`.
    pub step: T,
    /// Decimal digits kept when rounding committed values. Ignored (zero)
    /// for integer value types.
    pub precision: u32,
    /// Called once per committed change with the moved bound and new range.
    #[setters(skip)]
    pub on_value_changed: CallbackWith<(Bound, RangeInclusive<T>)>,
    /// Optional label text for a value; `None` or empty text falls back to
    /// numeric formatting.
    #[setters(skip)]
    pub describe_value: Option<CallbackWith<T, Option<String>>>,
    /// Optional caption shown with the slider.
    #[setters(strip_option, into)]
    pub label: Option<String>,
    /// Where the caption goes.
    pub label_position: LabelPosition,
    /// Handling of drag positions past the other handle or the track end.
    pub drag_boundary: DragBoundary,
    /// Pointer travel, in pixels, before a press becomes a drag.
    pub drag_threshold: f64,
    /// Ignore all gestures and paint with disabled colors.
    pub disabled: bool,
    /// Colors and sizes.
    pub style: RangeSliderStyle,
}

impl<T: SliderValue> RangeSliderArgs<T> {
    /// Sets the change handler.
    pub fn on_value_changed<F>(mut self, on_value_changed: F) -> Self
    where
        F: Fn(Bound, RangeInclusive<T>) + Send + Sync + 'static,
    {
        self.on_value_changed =
            CallbackWith::new(move |(bound, range)| on_value_changed(bound, range));
        self
    }

    /// Sets the change handler using a shared callback.
    pub fn on_value_changed_shared(
        mut self,
        on_value_changed: impl Into<CallbackWith<(Bound, RangeInclusive<T>)>>,
    ) -> Self {
        self.on_value_changed = on_value_changed.into();
        self
    }

    /// Sets the value describer used for label text.
    pub fn describe_value<F>(mut self, describe_value: F) -> Self
    where
        F: Fn(T) -> Option<String> + Send + Sync + 'static,
    {
        self.describe_value = Some(CallbackWith::new(describe_value));
        self
    }

    /// Sets the value describer using a shared callback.
    pub fn describe_value_shared(
        mut self,
        describe_value: impl Into<CallbackWith<T, Option<String>>>,
    ) -> Self {
        self.describe_value = Some(describe_value.into());
        self
    }
}

impl<T: SliderValue> Default for RangeSliderArgs<T> {
    fn default() -> Self {
        Self {
            limits: T::from_f64(0.0)..=T::from_f64(100.0),
            step: T::from_f64(1.0),
            precision: 0,
            on_value_changed: CallbackWith::noop(),
            describe_value: None,
            label: None,
            label_position: LabelPosition::Top,
            drag_boundary: DragBoundary::Reject,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            disabled: false,
            style: RangeSliderStyle::default(),
        }
    }
}

impl<T: SliderValue> fmt::Debug for RangeSliderArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSliderArgs")
            .field("limits", &self.limits)
            .field("step", &self.step)
            .field("precision", &self.precision)
            .field("on_value_changed", &"<callback>")
            .field("describe_value", &self.describe_value.as_ref().map(|_| "<callback>"))
            .field("label", &self.label)
            .field("label_position", &self.label_position)
            .field("drag_boundary", &self.drag_boundary)
            .field("drag_threshold", &self.drag_threshold)
            .field("disabled", &self.disabled)
            .field("style", &self.style)
            .finish()
    }
}

/// A configured range slider.
///
/// Holds the validated configuration and the transient drag state; the
/// selected range itself always comes from the host.
pub struct RangeSlider<T: SliderValue = f64> {
    args: RangeSliderArgs<T>,
    model: RangeModel,
    mapper: CoordinateMapper,
    formatter: ValueFormatter<T>,
    drag: DragController,
}

impl<T: SliderValue> RangeSlider<T> {
    /// Validates `args` and builds the slider.
    pub fn new(args: RangeSliderArgs<T>) -> Result<Self, RangeSliderError> {
        let min = args.limits.start().into_f64();
        let max = args.limits.end().into_f64();
        let step = args.step.into_f64();

        let validation = if !(min.is_finite() && max.is_finite() && min < max) {
            Err(RangeSliderError::InvalidLimits { min, max })
        } else if !(step.is_finite() && step > 0.0) {
            Err(RangeSliderError::InvalidStep(step))
        } else if args.precision > MAX_PRECISION {
            Err(RangeSliderError::PrecisionTooLarge(args.precision))
        } else if !(args.drag_threshold.is_finite() && args.drag_threshold >= 0.0) {
            Err(RangeSliderError::InvalidDragThreshold(args.drag_threshold))
        } else {
            Ok(())
        };
        if let Err(err) = validation {
            warn!(%err, "rejecting range slider configuration");
            return Err(err);
        }

        let precision = if T::INTEGRAL { 0 } else { args.precision };
        let model = RangeModel::new(min, max, step, precision);
        let formatter = ValueFormatter::new(precision, args.describe_value.clone());
        let drag = DragController::new(args.drag_threshold, args.drag_boundary);
        debug!(min, max, step, precision, "range slider configured");

        Ok(Self {
            args,
            model,
            mapper: CoordinateMapper::new(min, max),
            formatter,
            drag,
        })
    }

    pub fn args(&self) -> &RangeSliderArgs<T> {
        &self.args
    }

    pub fn limits(&self) -> &RangeInclusive<T> {
        &self.args.limits
    }

    pub fn step(&self) -> T {
        self.args.step
    }

    /// Effective precision: zero for integer value types.
    pub fn precision(&self) -> u32 {
        self.model.precision()
    }

    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn drag_state(&self, bound: Bound) -> DragState {
        self.drag.state(bound)
    }

    pub fn dragging(&self) -> Option<Bound> {
        self.drag.dragging()
    }

    /// Drops any in-flight gesture without committing.
    pub fn cancel_drag(&mut self) {
        if self.drag.is_tracking() {
            trace!("drag cancelled by host");
        }
        self.drag.reset();
    }

    /// Offset in pixels of `value` along a track `track_width` wide.
    pub fn value_to_offset(&self, value: T, track_width: Px) -> f64 {
        self.mapper
            .value_to_offset(value.into_f64(), track_width.to_f64())
    }

    /// Value under `offset` pixels along a track `track_width` wide, before
    /// any snapping.
    pub fn offset_to_value(&self, offset: f64, track_width: Px) -> f64 {
        self.mapper.offset_to_value(offset, track_width.to_f64())
    }

    /// Checks a host range against `min <= lower <= upper <= max`.
    pub fn check_range(&self, range: &RangeInclusive<T>) -> Result<(), RangeSliderError> {
        let span = span_of(range);
        if self.model.contains(span) {
            Ok(())
        } else {
            Err(RangeSliderError::RangeOutOfLimits {
                lower: span.lower,
                upper: span.upper,
                min: self.model.min(),
                max: self.model.max(),
            })
        }
    }

    /// Label text for a value.
    pub fn describe(&self, value: T) -> String {
        self.formatter.format(value)
    }

    /// Moves the lower bound toward `candidate` and notifies on change.
    pub fn commit_lower(
        &self,
        range: &RangeInclusive<T>,
        candidate: T,
    ) -> Option<RangeChange<T>> {
        self.commit(range, Bound::Lower, candidate.into_f64())
    }

    /// Moves the upper bound toward `candidate` and notifies on change.
    pub fn commit_upper(
        &self,
        range: &RangeInclusive<T>,
        candidate: T,
    ) -> Option<RangeChange<T>> {
        self.commit(range, Bound::Upper, candidate.into_f64())
    }

    /// Applies one gesture event against the host's current range.
    ///
    /// Returns the committed change, if the event produced one; the change
    /// has already been reported through `on_value_changed`.
    pub fn handle_gesture(
        &mut self,
        range: &RangeInclusive<T>,
        event: GestureEvent,
        track_width: Px,
    ) -> Option<RangeChange<T>> {
        let change = self.propose_gesture(range, &event, track_width)?;
        self.notify(&change);
        Some(change)
    }

    /// Applies a batch of events in delivery order, feeding each committed
    /// range into the next event.
    pub fn handle_gestures(
        &mut self,
        range: &RangeInclusive<T>,
        events: &[GestureEvent],
        track_width: Px,
    ) -> RangeChanges<T> {
        let mut current = range.clone();
        let mut changes = RangeChanges::new();
        for event in events {
            if let Some(change) = self.handle_gesture(&current, *event, track_width) {
                current = change.range.clone();
                changes.push(change);
            }
        }
        changes
    }

    /// Applies one gesture event to a host binding: reads the current
    /// range, stores the committed range, then notifies.
    pub fn drive(
        &mut self,
        binding: &Binding<RangeInclusive<T>>,
        event: GestureEvent,
        track_width: Px,
    ) -> Option<RangeChange<T>> {
        let current = binding.get();
        let change = self.propose_gesture(&current, &event, track_width)?;
        binding.set(change.range.clone());
        self.notify(&change);
        Some(change)
    }

    /// Geometry, colors and label text for the renderer.
    pub fn frame(
        &self,
        range: &RangeInclusive<T>,
        track_width: Px,
        scale_factor: f64,
    ) -> SliderFrame {
        let span = self.host_span(range);
        let labels = (
            self.describe(T::from_f64(span.lower)),
            self.describe(T::from_f64(span.upper)),
        );
        let caption = self.args.label.as_ref().map(|text| CaptionFrame {
            text: text.clone(),
            position: self.args.label_position,
        });
        slider_frame(FrameInputs {
            span,
            mapper: &self.mapper,
            track_width,
            scale_factor,
            style: &self.args.style,
            disabled: self.args.disabled,
            dragging: self.drag.dragging(),
            labels,
            caption,
        })
    }

    fn propose_gesture(
        &mut self,
        range: &RangeInclusive<T>,
        event: &GestureEvent,
        track_width: Px,
    ) -> Option<RangeChange<T>> {
        if self.args.disabled {
            if self.drag.is_tracking() {
                trace!("slider disabled, dropping gesture");
                self.drag.reset();
            }
            return None;
        }
        let span = self.host_span(range);
        let ctx = DragContext {
            span,
            mapper: &self.mapper,
            track_width: track_width.to_f64(),
        };
        let (bound, candidate) = self.drag.update(event, ctx)?;
        self.propose(range, span, bound, candidate)
    }

    fn commit(
        &self,
        range: &RangeInclusive<T>,
        bound: Bound,
        candidate: f64,
    ) -> Option<RangeChange<T>> {
        let span = self.host_span(range);
        let change = self.propose(range, span, bound, candidate)?;
        self.notify(&change);
        Some(change)
    }

    fn propose(
        &self,
        range: &RangeInclusive<T>,
        span: Span,
        bound: Bound,
        candidate: f64,
    ) -> Option<RangeChange<T>> {
        let Some(next) = self.model.commit(bound, span, candidate) else {
            trace!(?bound, candidate, "commit is a no-op");
            return None;
        };
        let next_range = T::from_f64(next.lower)..=T::from_f64(next.upper);
        if next_range == *range {
            trace!(?bound, candidate, "commit is a no-op");
            return None;
        }
        debug!(
            ?bound,
            from = span.get(bound),
            to = next.get(bound),
            "range bound committed"
        );
        Some(RangeChange {
            bound,
            range: next_range,
        })
    }

    fn notify(&self, change: &RangeChange<T>) {
        self.args
            .on_value_changed
            .call((change.bound, change.range.clone()));
    }

    /// The host range in `f64`, clamped and ordered if the host broke the
    /// invariant.
    fn host_span(&self, range: &RangeInclusive<T>) -> Span {
        let span = span_of(range);
        if self.model.contains(span) {
            return span;
        }
        let normalized = self.model.normalize(span);
        warn!(
            lower = span.lower,
            upper = span.upper,
            min = self.model.min(),
            max = self.model.max(),
            "host range violates slider limits, normalizing"
        );
        normalized
    }
}

impl<T: SliderValue> fmt::Debug for RangeSlider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("args", &self.args)
            .field("model", &self.model)
            .field("drag", &self.drag)
            .finish()
    }
}

fn span_of<T: SliderValue>(range: &RangeInclusive<T>) -> Span {
    Span::new(range.start().into_f64(), range.end().into_f64())
}
