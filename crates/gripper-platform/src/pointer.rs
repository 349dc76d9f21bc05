//! Pointer input events delivered to a hit-region.
//!
//! Hosts translate their native mouse/touch events into [`PointerEvent`]
//! values with integer client coordinates before handing them to a widget.

use gripper_common::types::Point;
use serde::{Deserialize, Serialize};

/// The three pointer event kinds a resize handle listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

impl PointerEvent {
    pub fn down(x: i32, y: i32) -> Self {
        Self::Down { x, y }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::Move { x, y }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self::Up { x, y }
    }

    /// Client coordinates of the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => Point::new(x, y),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Move { .. } => "move",
            Self::Up { .. } => "up",
        }
    }
}

/// What the host should do with an event after a widget has handled it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the host's default action (text selection, native drag).
    pub prevent_default: bool,
    /// Do not deliver the event to any other listener.
    pub stop_propagation: bool,
}

impl EventResponse {
    /// The event is fully owned by the widget.
    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };

    /// The widget did not act on the event.
    pub const IGNORED: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    pub fn is_consumed(&self) -> bool {
        self.prevent_default && self.stop_propagation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_each_kind() {
        assert_eq!(PointerEvent::down(1, 2).position(), Point::new(1, 2));
        assert_eq!(PointerEvent::moved(-3, 4).position(), Point::new(-3, 4));
        assert_eq!(PointerEvent::up(5, -6).position(), Point::new(5, -6));
    }

    #[test]
    fn names() {
        assert_eq!(PointerEvent::down(0, 0).name(), "down");
        assert_eq!(PointerEvent::moved(0, 0).name(), "move");
        assert_eq!(PointerEvent::up(0, 0).name(), "up");
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"[
            {"type":"down","x":100,"y":100},
            {"type":"move","x":110,"y":95},
            {"type":"up","x":108,"y":99}
        ]"#;
        let events: Vec<PointerEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(
            events,
            vec![
                PointerEvent::down(100, 100),
                PointerEvent::moved(110, 95),
                PointerEvent::up(108, 99),
            ]
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{"type":"wheel","x":0,"y":0}"#;
        assert!(serde_json::from_str::<PointerEvent>(json).is_err());
    }

    #[test]
    fn consumed_response() {
        assert!(EventResponse::CONSUMED.is_consumed());
        assert!(!EventResponse::IGNORED.is_consumed());
    }
}
