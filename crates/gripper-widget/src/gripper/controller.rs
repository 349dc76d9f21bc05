use std::sync::atomic::{AtomicU32, Ordering};

use gripper_common::types::{Point, Size};
use gripper_common::{ObserverError, RegionId, WidgetError};
use gripper_platform::{EventResponse, HandleAssets, PointerCapture, PointerEvent};
use tracing::{debug, trace};

use super::builder::GripperBuilder;
use super::types::{DragSession, ResizeObserver};

static NEXT_REGION: AtomicU32 = AtomicU32::new(1);

pub(crate) fn next_region_id() -> RegionId {
    RegionId(NEXT_REGION.fetch_add(1, Ordering::Relaxed))
}

/// A fixed-size drag handle that reports resize deltas to an observer.
///
/// Feed every pointer event delivered to the handle's hit-region through
/// [`handle_pointer_event`](Self::handle_pointer_event). Capture is acquired
/// on press, re-asserted on every move of an active drag, and released on
/// every release event, including releases that arrive with no drag open.
pub struct ResizeGripper<O, C> {
    region: RegionId,
    observer: O,
    capture: C,
    hit_region: Size,
    session: DragSession,
}

impl<O: ResizeObserver, C: PointerCapture> ResizeGripper<O, C> {
    /// How the host must treat every event passed to
    /// [`handle_pointer_event`](Self::handle_pointer_event), including ones
    /// whose observer callback failed.
    pub const RESPONSE: EventResponse = EventResponse::CONSUMED;

    /// Create a handle using the bundled asset size and a fresh region id.
    pub fn new(observer: O, capture: C) -> Self {
        Self::from_parts(
            next_region_id(),
            observer,
            capture,
            HandleAssets::bundled().size(),
        )
    }

    /// Start a builder; [`GripperBuilder::build`] fails if no observer is set.
    pub fn builder(capture: C) -> GripperBuilder<O, C> {
        GripperBuilder::new(capture)
    }

    pub(crate) fn from_parts(region: RegionId, observer: O, capture: C, hit_region: Size) -> Self {
        debug!(%region, width = hit_region.width, height = hit_region.height, "resize gripper created");
        Self {
            region,
            observer,
            capture,
            hit_region,
            session: DragSession::default(),
        }
    }

    pub fn hit_region_width(&self) -> u32 {
        self.hit_region.width
    }

    pub fn hit_region_height(&self) -> u32 {
        self.hit_region.height
    }

    pub fn hit_region(&self) -> Size {
        self.hit_region
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn is_sizing(&self) -> bool {
        self.session.is_active()
    }

    /// The previous pointer sample of the active drag.
    pub fn last_sample(&self) -> Option<Point> {
        self.session.last_sample()
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn capture_mut(&mut self) -> &mut C {
        &mut self.capture
    }

    pub fn into_parts(self) -> (O, C) {
        (self.observer, self.capture)
    }

    /// Run one pointer event through the state machine.
    ///
    /// Every event delivered to the hit-region is consumed: the host must
    /// prevent its default action and stop propagation. That holds for the
    /// `Err` case too; an observer failure is returned unchanged, the state
    /// transition that was in progress is not rolled back, and the response
    /// the host applies is still [`Self::RESPONSE`].
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Result<EventResponse, WidgetError> {
        trace!(region = %self.region, kind = event.name(), sizing = self.is_sizing(), "pointer event");
        match event {
            PointerEvent::Down { x, y } => self.press(Point::new(x, y))?,
            PointerEvent::Move { x, y } => self.drag_to(Point::new(x, y))?,
            PointerEvent::Up { .. } => self.release()?,
        }
        Ok(Self::RESPONSE)
    }

    /// End an active drag without a release event.
    ///
    /// Returns `Ok(false)` if no drag was in progress. The observer receives
    /// `on_resizing_cancelled` and capture is released.
    pub fn cancel(&mut self) -> Result<bool, WidgetError> {
        if !self.session.is_active() {
            return Ok(false);
        }
        debug!(region = %self.region, "resize cancelled");
        self.finish_session(true)?;
        Ok(true)
    }

    /// Host notification that capture was taken away mid-drag.
    ///
    /// The drag stays open; the next move re-acquires capture.
    pub fn on_capture_lost(&mut self) {
        if self.session.is_active() {
            debug!(region = %self.region, "pointer capture lost during resize");
            self.session.mark_capture_lost();
        }
    }

    fn press(&mut self, at: Point) -> Result<(), ObserverError> {
        if self.session.is_active() {
            // A press without a release closes the open drag first so capture
            // never spans two sessions.
            debug!(region = %self.region, "press while sizing, completing previous drag");
            self.finish_session(false)?;
        }
        self.session.begin(at);
        self.capture.set_capture(self.region);
        debug!(region = %self.region, x = at.x, y = at.y, "resize started");
        Ok(())
    }

    fn drag_to(&mut self, to: Point) -> Result<(), ObserverError> {
        if !self.session.is_active() {
            return Ok(());
        }
        // Capture is re-asserted on every move: the host can drop it mid-drag
        // without notice, which would cut the delta stream short.
        self.capture.set_capture(self.region);
        if self.session.take_capture_lost() {
            debug!(region = %self.region, "pointer capture re-acquired");
        }

        let delta = self.session.delta_to(to);
        self.observer.on_resizing(delta)?;
        self.session.record(to);
        Ok(())
    }

    fn release(&mut self) -> Result<(), ObserverError> {
        if self.session.is_active() {
            debug!(region = %self.region, "resize completed");
            return self.finish_session(false);
        }
        self.capture.release_capture(self.region);
        Ok(())
    }

    /// Close the session, notify the observer, then release capture.
    ///
    /// Capture is released even when the observer fails.
    fn finish_session(&mut self, cancelled: bool) -> Result<(), ObserverError> {
        self.session.end();
        let outcome = if cancelled {
            self.observer.on_resizing_cancelled()
        } else {
            self.observer.on_resizing_completed()
        };
        self.capture.release_capture(self.region);
        outcome
    }
}

impl<O, C> std::fmt::Debug for ResizeGripper<O, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeGripper")
            .field("region", &self.region)
            .field("hit_region", &self.hit_region)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
