use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A pointer sample in client (viewport) pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Two's-complement difference: coordinates far enough apart to overflow
/// `i32` wrap instead of panicking.
impl Sub for Point {
    type Output = ResizeDelta;

    fn sub(self, rhs: Point) -> ResizeDelta {
        ResizeDelta {
            dx: self.x.wrapping_sub(rhs.x),
            dy: self.y.wrapping_sub(rhs.y),
        }
    }
}

/// Signed displacement between two consecutive pointer samples.
///
/// Always relative to the previous sample, never to the start of a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResizeDelta {
    pub dx: i32,
    pub dy: i32,
}

impl ResizeDelta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_subtraction_yields_delta() {
        let delta = Point::new(110, 95) - Point::new(100, 100);
        assert_eq!(delta, ResizeDelta::new(10, -5));
    }

    #[test]
    fn extreme_coordinates_wrap() {
        let delta = Point::new(1, i32::MAX) - Point::new(i32::MIN, -1);
        assert_eq!(delta, ResizeDelta::new(i32::MIN + 1, i32::MIN));
    }

    #[test]
    fn delta_zero() {
        assert!(ResizeDelta::default().is_zero());
        assert!(!ResizeDelta::new(0, 1).is_zero());
    }

    #[test]
    fn point_serialization() {
        let p = Point::new(-3, 42);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":-3,"y":42}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
