//! Visual assets for the resize handle.
//!
//! The bundled asset set is built once, on first use, and is immutable for
//! the rest of the process. Hosts that need a different hit-region size
//! derive an owned copy with [`HandleAssets::with_config`].

use std::sync::OnceLock;

use gripper_common::types::Size;
use gripper_config::schema::HandleConfig;
use tracing::debug;

/// Pixel size of the bundled handle image.
pub const BUNDLED_HANDLE_SIZE: Size = Size::new(12, 12);

/// Style class hosts apply to the handle element.
pub const HANDLE_STYLE_CLASS: &str = "resize-gripper";

static BUNDLED: OnceLock<HandleAssets> = OnceLock::new();

/// Image and style metadata for a resize handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleAssets {
    image_name: &'static str,
    style_class: &'static str,
    size: Size,
}

impl HandleAssets {
    /// The process-wide bundled asset set.
    pub fn bundled() -> &'static HandleAssets {
        BUNDLED.get_or_init(|| {
            debug!("initializing bundled handle assets");
            HandleAssets {
                image_name: "resize-gripper.png",
                style_class: HANDLE_STYLE_CLASS,
                size: BUNDLED_HANDLE_SIZE,
            }
        })
    }

    /// Bundled assets with any size overrides from `config` applied.
    pub fn with_config(config: &HandleConfig) -> HandleAssets {
        let bundled = Self::bundled();
        HandleAssets {
            size: Size::new(
                config.width.unwrap_or(bundled.size.width),
                config.height.unwrap_or(bundled.size.height),
            ),
            ..bundled.clone()
        }
    }

    pub fn image_name(&self) -> &'static str {
        self.image_name
    }

    pub fn style_class(&self) -> &'static str {
        self.style_class
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }
}
