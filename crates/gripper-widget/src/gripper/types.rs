use gripper_common::types::{Point, ResizeDelta};
use gripper_common::ObserverError;

// =============================================================================
// OBSERVER
// =============================================================================

/// Receives resize progress from a [`ResizeGripper`](super::ResizeGripper).
///
/// Deltas are relative to the previous sample. Observers that need a running
/// total, or that bound the size of whatever they resize, do that bookkeeping
/// themselves.
pub trait ResizeObserver {
    fn on_resizing(&mut self, delta: ResizeDelta) -> Result<(), ObserverError>;

    fn on_resizing_completed(&mut self) -> Result<(), ObserverError>;

    /// Called instead of `on_resizing_completed` when the host cancels a drag.
    fn on_resizing_cancelled(&mut self) -> Result<(), ObserverError> {
        self.on_resizing_completed()
    }
}

impl<T: ResizeObserver + ?Sized> ResizeObserver for &mut T {
    fn on_resizing(&mut self, delta: ResizeDelta) -> Result<(), ObserverError> {
        (**self).on_resizing(delta)
    }

    fn on_resizing_completed(&mut self) -> Result<(), ObserverError> {
        (**self).on_resizing_completed()
    }

    fn on_resizing_cancelled(&mut self) -> Result<(), ObserverError> {
        (**self).on_resizing_cancelled()
    }
}

impl<T: ResizeObserver + ?Sized> ResizeObserver for Box<T> {
    fn on_resizing(&mut self, delta: ResizeDelta) -> Result<(), ObserverError> {
        (**self).on_resizing(delta)
    }

    fn on_resizing_completed(&mut self) -> Result<(), ObserverError> {
        (**self).on_resizing_completed()
    }

    fn on_resizing_cancelled(&mut self) -> Result<(), ObserverError> {
        (**self).on_resizing_cancelled()
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// Pointer bookkeeping for one press-drag-release sequence.
///
/// `last_x`/`last_y` only mean something while the session is active; they
/// are zeroed when it ends and must never be read as a coordinate then.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    active: bool,
    last_x: i32,
    last_y: i32,
    capture_lost: bool,
}

impl DragSession {
    pub(crate) fn begin(&mut self, at: Point) {
        *self = Self {
            active: true,
            last_x: at.x,
            last_y: at.y,
            capture_lost: false,
        };
    }

    /// Displacement of `to` from the previous sample.
    pub(crate) fn delta_to(&self, to: Point) -> ResizeDelta {
        to - Point::new(self.last_x, self.last_y)
    }

    pub(crate) fn record(&mut self, at: Point) {
        self.last_x = at.x;
        self.last_y = at.y;
    }

    pub(crate) fn end(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn mark_capture_lost(&mut self) {
        self.capture_lost = true;
    }

    pub(crate) fn take_capture_lost(&mut self) -> bool {
        std::mem::take(&mut self.capture_lost)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The previous pointer sample, or `None` when no drag is in progress.
    pub fn last_sample(&self) -> Option<Point> {
        self.active.then(|| Point::new(self.last_x, self.last_y))
    }
}
