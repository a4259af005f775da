//! Axis-aligned rectangle geometry for paddles
//!
//! A rectangle is defined by its top-left corner and its size, in field
//! coordinates (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.half_extents()
    }

    /// The four corners, clockwise from top-left
    pub fn corners(&self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.min,
            Vec2::new(max.x, self.min.y),
            max,
            Vec2::new(self.min.x, max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 175.0, 10.0, 100.0);
        assert_eq!(rect.center(), Vec2::new(15.0, 225.0));
        assert_eq!(rect.max(), Vec2::new(20.0, 275.0));
    }

    #[test]
    fn test_rect_corners_clockwise() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let [tl, tr, br, bl] = rect.corners();
        assert_eq!(tl, Vec2::new(1.0, 2.0));
        assert_eq!(tr, Vec2::new(4.0, 2.0));
        assert_eq!(br, Vec2::new(4.0, 6.0));
        assert_eq!(bl, Vec2::new(1.0, 6.0));
    }
}
