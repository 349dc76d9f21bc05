//! Exclusive pointer capture.
//!
//! While a region holds capture, the host routes every pointer event to it
//! regardless of where the cursor is. Only one region can hold capture at a
//! time; both primitives are idempotent.

use gripper_common::RegionId;
use tracing::debug;

/// Host primitives for acquiring and releasing pointer capture.
pub trait PointerCapture {
    /// Route all pointer events to `region` until released.
    fn set_capture(&mut self, region: RegionId);

    /// Stop routing pointer events to `region`. A no-op if `region` does not
    /// hold capture.
    fn release_capture(&mut self, region: RegionId);
}

impl<T: PointerCapture + ?Sized> PointerCapture for &mut T {
    fn set_capture(&mut self, region: RegionId) {
        (**self).set_capture(region);
    }

    fn release_capture(&mut self, region: RegionId) {
        (**self).release_capture(region);
    }
}

impl<T: PointerCapture + ?Sized> PointerCapture for Box<T> {
    fn set_capture(&mut self, region: RegionId) {
        (**self).set_capture(region);
    }

    fn release_capture(&mut self, region: RegionId) {
        (**self).release_capture(region);
    }
}

/// A single call made against a [`PointerCapture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCall {
    Set(RegionId),
    Release(RegionId),
}

/// In-process capture owner that records every request.
///
/// Suitable for hosts that route pointer events themselves and for tests.
/// [`lose_capture`](Self::lose_capture) simulates the host taking capture
/// away without telling the owner.
#[derive(Debug, Default)]
pub struct TrackedCapture {
    owner: Option<RegionId>,
    calls: Vec<CaptureCall>,
}

impl TrackedCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region currently holding capture.
    pub fn owner(&self) -> Option<RegionId> {
        self.owner
    }

    pub fn is_held_by(&self, region: RegionId) -> bool {
        self.owner == Some(region)
    }

    pub fn calls(&self) -> &[CaptureCall] {
        &self.calls
    }

    pub fn acquire_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, CaptureCall::Set(_)))
            .count()
    }

    pub fn release_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, CaptureCall::Release(_)))
            .count()
    }

    /// Drop capture as if the host window lost focus.
    pub fn lose_capture(&mut self) -> Option<RegionId> {
        let lost = self.owner.take();
        if let Some(region) = lost {
            debug!(%region, "pointer capture lost");
        }
        lost
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl PointerCapture for TrackedCapture {
    fn set_capture(&mut self, region: RegionId) {
        self.calls.push(CaptureCall::Set(region));
        if self.owner != Some(region) {
            debug!(%region, previous = ?self.owner, "pointer capture acquired");
        }
        self.owner = Some(region);
    }

    fn release_capture(&mut self, region: RegionId) {
        self.calls.push(CaptureCall::Release(region));
        if self.owner == Some(region) {
            debug!(%region, "pointer capture released");
            self.owner = None;
        }
    }
}
