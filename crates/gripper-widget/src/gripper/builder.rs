use gripper_common::types::Size;
use gripper_common::{RegionId, WidgetError};
use gripper_platform::{HandleAssets, PointerCapture};

use super::controller::{next_region_id, ResizeGripper};
use super::types::ResizeObserver;

/// Assembles a [`ResizeGripper`] from host-supplied collaborators.
pub struct GripperBuilder<O, C> {
    capture: C,
    observer: Option<O>,
    region: Option<RegionId>,
    hit_region: Option<Size>,
}

impl<O: ResizeObserver, C: PointerCapture> GripperBuilder<O, C> {
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            observer: None,
            region: None,
            hit_region: None,
        }
    }

    pub fn observer(mut self, observer: O) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Bind to a host-assigned region id instead of a generated one.
    pub fn region(mut self, region: RegionId) -> Self {
        self.region = Some(region);
        self
    }

    /// Size the hit-region from `assets` instead of the bundled image.
    pub fn assets(mut self, assets: &HandleAssets) -> Self {
        self.hit_region = Some(assets.size());
        self
    }

    pub fn build(self) -> Result<ResizeGripper<O, C>, WidgetError> {
        let observer = self.observer.ok_or(WidgetError::MissingObserver)?;
        Ok(ResizeGripper::from_parts(
            self.region.unwrap_or_else(next_region_id),
            observer,
            self.capture,
            self.hit_region
                .unwrap_or_else(|| HandleAssets::bundled().size()),
        ))
    }
}
