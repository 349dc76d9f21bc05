//! Pointer-driven resize handle.
//!
//! [`ResizeGripper`] turns pointer down/move/up on a fixed-size hit-region
//! into a stream of per-sample resize deltas plus a completion signal for a
//! [`ResizeObserver`].

pub mod gripper;

pub use gripper::{DragSession, GripperBuilder, ResizeGripper, ResizeObserver};
