//! `gripper replay`: feed a recorded pointer script through a resize handle.

use std::path::Path;

use gripper_common::types::Size;
use gripper_common::GripperError;
use gripper_config::GripperConfig;
use gripper_platform::{HandleAssets, PointerEvent, TrackedCapture};
use gripper_widget::ResizeGripper;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::panel::PanelResizer;

// =============================================================================
// SCRIPT
// =============================================================================

/// One entry in a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayStep {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
    /// Host cancels the drag (e.g. Escape pressed).
    Cancel,
    /// Host takes pointer capture away.
    CaptureLost,
}

pub fn parse_script(json: &str) -> Result<Vec<ReplayStep>, GripperError> {
    serde_json::from_str(json).map_err(|e| GripperError::Other(format!("invalid replay script: {e}")))
}

pub fn load_script(path: &Path) -> Result<Vec<ReplayStep>, GripperError> {
    let contents = std::fs::read_to_string(path)?;
    parse_script(&contents)
}

// =============================================================================
// REPLAY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    pub size: Size,
    pub hit_region: Size,
    pub resizes: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub captures_acquired: usize,
    pub captures_released: usize,
    pub capture_held: bool,
}

pub fn replay(steps: &[ReplayStep], config: &GripperConfig) -> Result<ReplayOutcome, GripperError> {
    let assets = HandleAssets::with_config(&config.handle);
    let mut gripper = ResizeGripper::builder(TrackedCapture::new())
        .observer(PanelResizer::new(&config.drag))
        .assets(&assets)
        .build()?;
    info!(region = %gripper.region(), steps = steps.len(), "replaying pointer script");

    for (index, step) in steps.iter().enumerate() {
        debug!(index, ?step, "replay step");
        match *step {
            ReplayStep::Down { x, y } => {
                let _ = gripper.handle_pointer_event(PointerEvent::down(x, y))?;
            }
            ReplayStep::Move { x, y } => {
                let _ = gripper.handle_pointer_event(PointerEvent::moved(x, y))?;
            }
            ReplayStep::Up { x, y } => {
                let _ = gripper.handle_pointer_event(PointerEvent::up(x, y))?;
            }
            ReplayStep::Cancel => {
                gripper.cancel()?;
            }
            ReplayStep::CaptureLost => {
                gripper.capture_mut().lose_capture();
                gripper.on_capture_lost();
            }
        }
    }

    let hit_region = gripper.hit_region();
    let region = gripper.region();
    let (panel, capture) = gripper.into_parts();
    Ok(ReplayOutcome {
        size: panel.size(),
        hit_region,
        resizes: panel.resize_count(),
        completed: panel.completed_count(),
        cancelled: panel.cancelled_count(),
        captures_acquired: capture.acquire_count(),
        captures_released: capture.release_count(),
        capture_held: capture.is_held_by(region),
    })
}

// =============================================================================
// TESTS
// =============================================================================
