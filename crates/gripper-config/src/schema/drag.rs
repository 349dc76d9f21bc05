//! Bounds for the panel driven by the resize handle.

use serde::{Deserialize, Serialize};

/// Size limits applied by the panel observer while dragging.
///
/// The handle itself never clamps; these bound the panel it resizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub initial_width: u32,
    pub initial_height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            initial_width: 400,
            initial_height: 300,
            min_width: 100,
            min_height: 60,
            max_width: 4096,
            max_height: 4096,
        }
    }
}
