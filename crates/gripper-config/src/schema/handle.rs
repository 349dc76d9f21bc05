//! Resize handle configuration.

use serde::{Deserialize, Serialize};

/// Hit-region size overrides for the resize handle.
///
/// Unset dimensions fall back to the bundled handle image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Width in pixels (valid range: 1-256).
    pub width: Option<u32>,
    /// Height in pixels (valid range: 1-256).
    pub height: Option<u32>,
}
