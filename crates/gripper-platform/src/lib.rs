//! Host-facing input primitives: pointer events, pointer capture and the
//! resize handle's visual assets.

pub mod assets;
pub mod capture;
pub mod pointer;

pub use assets::{HandleAssets, BUNDLED_HANDLE_SIZE, HANDLE_STYLE_CLASS};
pub use capture::{CaptureCall, PointerCapture, TrackedCapture};
pub use pointer::{EventResponse, PointerEvent};
