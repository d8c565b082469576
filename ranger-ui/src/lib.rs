//! # Ranger UI
//!
//! Framework-neutral primitives for ranger components: pixel units, colors,
//! callback handles, the pointer gesture stream, and host-owned bindings.
//!
//! Components built on this crate compute geometry and state; painting is
//! left to whatever renderer the host uses.

pub mod binding;
pub mod color;
pub mod dp;
pub mod gesture;
pub mod logging;
pub mod prop;
pub mod px;

pub use crate::{
    binding::Binding,
    color::Color,
    dp::Dp,
    gesture::{GestureBatch, GestureEvent, GesturePhase, GestureQueue, PointerId},
    prop::CallbackWith,
    px::Px,
};
pub use tracing;
