//! Resize handle state machine.
//!
//! ```text
//!            down                     move (re-capture, report delta)
//!   Idle ──────────────▶ Sizing ◀───────┐
//!    ▲ │                   │  └─────────┘
//!    │ └─ move: ignored    │
//!    │    up: release      │ up / cancel (reset, notify, release)
//!    └─────────────────────┘
//! ```

mod builder;
mod controller;
mod types;


pub use builder::GripperBuilder;
pub use controller::ResizeGripper;
pub use types::{DragSession, ResizeObserver};
