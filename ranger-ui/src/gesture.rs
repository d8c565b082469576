//! Pointer gesture stream.
//!
//! Platforms translate mouse and touch input into [`GestureEvent`]s: one
//! pointer identity, a [`GesturePhase`], and the pointer position projected
//! onto the primary axis of the component receiving the gesture, measured
//! in physical pixels from the component's origin.
//!
//! Events for a frame are collected in a [`GestureQueue`] and handed to
//! components as a [`GestureBatch`], oldest first.
//!
//! ```
//! use ranger_ui::gesture::{GestureEvent, GesturePhase, GestureQueue, PointerId};
//!
//! let mut queue = GestureQueue::default();
//! queue.push(GestureEvent::began(PointerId::MOUSE, 10.0));
//! queue.push(GestureEvent::changed(PointerId::MOUSE, 14.0));
//!
//! let batch = queue.take_events();
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch[0].phase, GesturePhase::Began);
//! assert!(queue.is_empty());
//! ```

use smallvec::SmallVec;

/// Identity of the pointer (mouse or touch contact) driving a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerId(pub u64);

impl PointerId {
    /// The single mouse pointer.
    pub const MOUSE: Self = Self(0);

    /// A touch contact, keyed by the platform's touch id.
    pub const fn touch(id: u64) -> Self {
        Self(id + 1)
    }
}

/// Lifecycle phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    /// The pointer went down.
    Began,
    /// The pointer moved while down.
    Changed,
    /// The pointer was released.
    Ended,
    /// The platform abandoned the gesture (focus loss, system gesture, ...).
    Cancelled,
}

/// A single update of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureEvent {
    pub pointer: PointerId,
    pub phase: GesturePhase,
    /// Position along the primary axis, in physical pixels from the origin.
    pub position: f64,
}

impl GestureEvent {
    pub const fn new(pointer: PointerId, phase: GesturePhase, position: f64) -> Self {
        Self {
            pointer,
            phase,
            position,
        }
    }

    pub const fn began(pointer: PointerId, position: f64) -> Self {
        Self::new(pointer, GesturePhase::Began, position)
    }

    pub const fn changed(pointer: PointerId, position: f64) -> Self {
        Self::new(pointer, GesturePhase::Changed, position)
    }

    pub const fn ended(pointer: PointerId, position: f64) -> Self {
        Self::new(pointer, GesturePhase::Ended, position)
    }

    pub const fn cancelled(pointer: PointerId, position: f64) -> Self {
        Self::new(pointer, GesturePhase::Cancelled, position)
    }
}

/// The gesture events delivered to a component in one frame.
pub type GestureBatch = SmallVec<[GestureEvent; 8]>;

/// Collects gesture events between frames, preserving delivery order.
#[derive(Debug, Default, Clone)]
pub struct GestureQueue {
    events: GestureBatch,
}

impl GestureQueue {
    /// Appends an event to the back of the queue.
    pub fn push(&mut self, event: GestureEvent) {
        self.events.push(event);
    }

    /// Drains every queued event, oldest first.
    pub fn take_events(&mut self) -> GestureBatch {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_events_preserves_order() {
        let mut queue = GestureQueue::default();
        let pointer = PointerId::touch(3);
        queue.push(GestureEvent::began(pointer, 1.0));
        queue.push(GestureEvent::changed(pointer, 2.0));
        queue.push(GestureEvent::ended(pointer, 3.0));

        let phases: Vec<_> = queue.take_events().iter().map(|e| e.phase).collect();
        assert_eq!(
            phases,
            vec![
                GesturePhase::Began,
                GesturePhase::Changed,
                GesturePhase::Ended
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn touch_ids_never_collide_with_mouse() {
        assert_ne!(PointerId::touch(0), PointerId::MOUSE);
        assert_eq!(PointerId::touch(0), PointerId(1));
    }
}
