use ranger_ui::{GestureEvent, GesturePhase, PointerId};
use tracing::trace;

use super::{Bound, DragBoundary, mapper::CoordinateMapper, model::Span};

/// Per-handle drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveGesture {
    pointer: PointerId,
    origin: f64,
    /// `None` while both handles sit on the same offset; resolved by the
    /// direction of the first movement past the threshold.
    target: Option<Bound>,
    dragging: bool,
}

/// Turns a pointer gesture stream into candidate values for one handle.
///
/// Only one gesture is tracked per slider; events from any other pointer
/// are ignored until the active gesture ends or is cancelled.
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    threshold: f64,
    boundary: DragBoundary,
    active: Option<ActiveGesture>,
}

/// Inputs a drag update reads but never writes.
#[derive(Debug, Clone, Copy)]
pub(super) struct DragContext<'a> {
    pub span: Span,
    pub mapper: &'a CoordinateMapper,
    pub track_width: f64,
}

impl DragController {
    pub fn new(threshold: f64, boundary: DragBoundary) -> Self {
        Self {
            threshold,
            boundary,
            active: None,
        }
    }

    pub fn state(&self, bound: Bound) -> DragState {
        match self.active {
            Some(ActiveGesture {
                target: Some(target),
                dragging: true,
                ..
            }) if target == bound => DragState::Dragging,
            _ => DragState::Idle,
        }
    }

    /// The handle currently being dragged, if any.
    pub fn dragging(&self) -> Option<Bound> {
        self.active
            .filter(|gesture| gesture.dragging)
            .and_then(|gesture| gesture.target)
    }

    /// Returns `true` while a pointer is down, dragging or not.
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Drops the active gesture without producing a candidate.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Feeds one gesture event; returns the handle to move and the raw
    /// candidate value when the event produces one.
    pub(super) fn update(
        &mut self,
        event: &GestureEvent,
        ctx: DragContext<'_>,
    ) -> Option<(Bound, f64)> {
        match event.phase {
            GesturePhase::Began => {
                self.begin(event, ctx);
                None
            }
            GesturePhase::Changed => {
                let gesture = self.active_for(event.pointer)?;
                let target = self.advance(gesture, event.position)?;
                self.candidate(target, event.position, ctx)
            }
            GesturePhase::Ended => {
                let gesture = self.active_for(event.pointer)?;
                let target = self.advance(gesture, event.position);
                self.active = None;
                self.candidate(target?, event.position, ctx)
            }
            GesturePhase::Cancelled => {
                if self.active_for(event.pointer).is_some() {
                    trace!(pointer = event.pointer.0, "drag cancelled");
                    self.active = None;
                }
                None
            }
        }
    }

    fn begin(&mut self, event: &GestureEvent, ctx: DragContext<'_>) {
        if let Some(active) = self.active
            && active.pointer != event.pointer
        {
            trace!(
                pointer = event.pointer.0,
                active = active.pointer.0,
                "ignoring second gesture"
            );
            return;
        }

        let lower = ctx.mapper.value_to_offset(ctx.span.lower, ctx.track_width);
        let upper = ctx.mapper.value_to_offset(ctx.span.upper, ctx.track_width);
        let target = if (upper - lower).abs() < f64::EPSILON {
            None
        } else if (event.position - lower).abs() <= (event.position - upper).abs() {
            Some(Bound::Lower)
        } else {
            Some(Bound::Upper)
        };

        trace!(
            pointer = event.pointer.0,
            position = event.position,
            ?target,
            "press"
        );
        self.active = Some(ActiveGesture {
            pointer: event.pointer,
            origin: event.position,
            target,
            dragging: false,
        });
    }

    fn active_for(&self, pointer: PointerId) -> Option<ActiveGesture> {
        match self.active {
            Some(active) if active.pointer == pointer => Some(active),
            Some(active) => {
                trace!(
                    pointer = pointer.0,
                    active = active.pointer.0,
                    "foreign pointer"
                );
                None
            }
            None => None,
        }
    }

    /// Moves the gesture past the movement threshold when it has travelled
    /// far enough. Returns the target handle once dragging.
    fn advance(&mut self, mut gesture: ActiveGesture, position: f64) -> Option<Bound> {
        if !gesture.dragging {
            let travelled = position - gesture.origin;
            if travelled.abs() < self.threshold || travelled.is_nan() {
                return None;
            }
            gesture.dragging = true;
            let target = *gesture.target.get_or_insert(if travelled < 0.0 {
                Bound::Lower
            } else {
                Bound::Upper
            });
            trace!(pointer = gesture.pointer.0, ?target, "drag started");
            self.active = Some(gesture);
        }
        gesture.target
    }

    fn candidate(
        &self,
        target: Bound,
        position: f64,
        ctx: DragContext<'_>,
    ) -> Option<(Bound, f64)> {
        let lower = ctx.mapper.value_to_offset(ctx.span.lower, ctx.track_width);
        let upper = ctx.mapper.value_to_offset(ctx.span.upper, ctx.track_width);
        let (start, end) = match target {
            Bound::Lower => (0.0, upper),
            Bound::Upper => (lower, ctx.track_width.max(0.0)),
        };

        let offset = if (start..=end).contains(&position) {
            position
        } else {
            match self.boundary {
                DragBoundary::Reject => {
                    trace!(?target, position, start, end, "drag update rejected");
                    return None;
                }
                DragBoundary::Pin if position.is_nan() => return None,
                DragBoundary::Pin => position.clamp(start, end),
            }
        };

        Some((target, ctx.mapper.offset_to_value(offset, ctx.track_width)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUSE: PointerId = PointerId::MOUSE;

    fn ctx(mapper: &CoordinateMapper, lower: f64, upper: f64) -> DragContext<'_> {
        DragContext {
            span: Span::new(lower, upper),
            mapper,
            track_width: 100.0,
        }
    }

    #[test]
    fn press_without_movement_is_a_tap() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);

        assert_eq!(

            drag.update(&GestureEvent::began(MOUSE, 20.0), ctx(&mapper, 20.0, 80.0)),

            None

        );
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, 20.5), ctx(&mapper, 20.0, 80.0)),
            None
        );
        assert_eq!(drag.state(Bound::Lower), DragState::Idle);
        assert_eq!(
            drag.update(&GestureEvent::ended(MOUSE, 20.5), ctx(&mapper, 20.0, 80.0)),
            None
        );
        assert!(!drag.is_tracking());
    }

    #[test]
    fn nearest_handle_is_selected() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);

        drag.update(&GestureEvent::began(MOUSE, 70.0), ctx(&mapper, 20.0, 80.0));
        let update = drag.update(&GestureEvent::changed(MOUSE, 65.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(update, Some((Bound::Upper, 65.0)));
        assert_eq!(drag.state(Bound::Upper), DragState::Dragging);
        assert_eq!(drag.dragging(), Some(Bound::Upper));
    }

    #[test]
    fn coincident_handles_follow_movement_direction() {
        let mapper = CoordinateMapper::new(0.0, 100.0);

        let mut left = DragController::new(1.0, DragBoundary::Reject);
        left.update(&GestureEvent::began(MOUSE, 50.0), ctx(&mapper, 50.0, 50.0));
        assert_eq!(
            left.update(&GestureEvent::changed(MOUSE, 40.0), ctx(&mapper, 50.0, 50.0)),
            Some((Bound::Lower, 40.0))
        );

        let mut right = DragController::new(1.0, DragBoundary::Reject);
        right.update(&GestureEvent::began(MOUSE, 50.0), ctx(&mapper, 50.0, 50.0));
        assert_eq!(
            right.update(&GestureEvent::changed(MOUSE, 60.0), ctx(&mapper, 50.0, 50.0)),
            Some((Bound::Upper, 60.0))
        );
    }

    #[test]
    fn reject_ignores_positions_past_counterpart() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);

        drag.update(&GestureEvent::began(MOUSE, 20.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, 90.0), ctx(&mapper, 20.0, 80.0)),
            None
        );
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, -3.0), ctx(&mapper, 20.0, 80.0)),
            None
        );
        assert_eq!(drag.state(Bound::Lower), DragState::Dragging);
    }

    #[test]
    fn pin_clamps_positions_past_counterpart() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Pin);

        drag.update(&GestureEvent::began(MOUSE, 20.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, 90.0), ctx(&mapper, 20.0, 80.0)),
            Some((Bound::Lower, 80.0))
        );
    }

    #[test]
    fn cancel_resets_without_candidate() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);

        drag.update(&GestureEvent::began(MOUSE, 80.0), ctx(&mapper, 20.0, 80.0));
        drag.update(&GestureEvent::changed(MOUSE, 70.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(
            drag.update(&GestureEvent::cancelled(MOUSE, 60.0), ctx(&mapper, 20.0, 70.0)),
            None
        );
        assert_eq!(drag.state(Bound::Upper), DragState::Idle);
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, 60.0), ctx(&mapper, 20.0, 70.0)),
            None
        );
    }

    #[test]
    fn second_pointer_is_ignored() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);
        let finger = PointerId::touch(1);

        drag.update(&GestureEvent::began(MOUSE, 20.0), ctx(&mapper, 20.0, 80.0));
        drag.update(&GestureEvent::began(finger, 80.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(
            drag.update(&GestureEvent::changed(finger, 75.0), ctx(&mapper, 20.0, 80.0)),
            None
        );
        assert_eq!(
            drag.update(&GestureEvent::changed(MOUSE, 30.0), ctx(&mapper, 20.0, 80.0)),
            Some((Bound::Lower, 30.0))
        );
    }

    #[test]
    fn release_position_is_the_last_update() {
        let mapper = CoordinateMapper::new(0.0, 100.0);
        let mut drag = DragController::new(1.0, DragBoundary::Reject);

        drag.update(&GestureEvent::began(MOUSE, 20.0), ctx(&mapper, 20.0, 80.0));
        drag.update(&GestureEvent::changed(MOUSE, 25.0), ctx(&mapper, 20.0, 80.0));
        assert_eq!(
            drag.update(&GestureEvent::ended(MOUSE, 27.0), ctx(&mapper, 25.0, 80.0)),
            Some((Bound::Lower, 27.0))
        );
        assert!(!drag.is_tracking());
    }
}
