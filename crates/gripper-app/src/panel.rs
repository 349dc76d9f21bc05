//! A panel whose size follows a resize handle.
//!
//! The handle reports raw per-sample deltas; the panel keeps the running
//! size and clamps it to the configured bounds.

use gripper_common::types::{ResizeDelta, Size};
use gripper_common::ObserverError;
use gripper_config::schema::DragConfig;
use gripper_widget::ResizeObserver;
use tracing::{debug, info};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone)]
pub struct PanelResizer {
    size: Size,
    min: Size,
    max: Size,
    /// Size when the current drag began; restored if the drag is cancelled.
    drag_origin: Option<Size>,
    resize_count: usize,
    completed_count: usize,
    cancelled_count: usize,
}

impl PanelResizer {
    pub fn new(bounds: &DragConfig) -> Self {
        let min = Size::new(bounds.min_width, bounds.min_height);
        let max = Size::new(bounds.max_width, bounds.max_height);
        Self {
            size: Size::new(
                bounds.initial_width.clamp(min.width, max.width),
                bounds.initial_height.clamp(min.height, max.height),
            ),
            min,
            max,
            drag_origin: None,
            resize_count: 0,
            completed_count: 0,
            cancelled_count: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }
}

// =============================================================================
// OBSERVER
// =============================================================================

fn apply(current: u32, delta: i32, min: u32, max: u32) -> u32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(i64::from(min), i64::from(max)) as u32
}

impl ResizeObserver for PanelResizer {
    fn on_resizing(&mut self, delta: ResizeDelta) -> Result<(), ObserverError> {
        self.drag_origin.get_or_insert(self.size);
        self.size = Size::new(
            apply(self.size.width, delta.dx, self.min.width, self.max.width),
            apply(self.size.height, delta.dy, self.min.height, self.max.height),
        );
        self.resize_count += 1;
        debug!(dx = delta.dx, dy = delta.dy, width = self.size.width, height = self.size.height, "panel resized");
        Ok(())
    }

    fn on_resizing_completed(&mut self) -> Result<(), ObserverError> {
        self.drag_origin = None;
        self.completed_count += 1;
        info!(width = self.size.width, height = self.size.height, "panel resize completed");
        Ok(())
    }

    fn on_resizing_cancelled(&mut self) -> Result<(), ObserverError> {
        if let Some(origin) = self.drag_origin.take() {
            self.size = origin;
        }
        self.cancelled_count += 1;
        info!(width = self.size.width, height = self.size.height, "panel resize cancelled");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
