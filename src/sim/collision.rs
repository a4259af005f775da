//! Collision detection between the ball and paddles
//!
//! The ball is a circle and the paddles are axis-aligned boxes. There is no
//! penetration resolution: a hit only flips the ball's horizontal direction.

use glam::Vec2;

use super::rect::Rect;

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Works on distances from the rectangle center, so the result does not
/// depend on which side of the rectangle the circle approaches from.
/// Touching counts as overlapping.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = rect.half_extents();
    let d = (center - rect.center()).abs();

    // Too far away on either axis
    if d.x > half.x + radius || d.y > half.y + radius {
        return false;
    }

    // Center within the box's horizontal or vertical band
    if d.x <= half.x || d.y <= half.y {
        return true;
    }

    // Near a corner
    let corner = d - half;
    corner.length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle_rect() -> Rect {
        Rect::new(10.0, 175.0, 10.0, 100.0)
    }

    #[test]
    fn test_overlap_face() {
        let rect = paddle_rect();
        // Ball just right of the paddle's right face
        assert!(circle_rect_overlap(Vec2::new(24.0, 225.0), 5.0, &rect));
        // Exactly touching
        assert!(circle_rect_overlap(Vec2::new(25.0, 225.0), 5.0, &rect));
        // One unit clear
        assert!(!circle_rect_overlap(Vec2::new(26.0, 225.0), 5.0, &rect));
    }

    #[test]
    fn test_overlap_inside() {
        let rect = paddle_rect();
        assert!(circle_rect_overlap(rect.center(), 5.0, &rect));
    }

    #[test]
    fn test_overlap_corner() {
        let rect = paddle_rect();
        // Diagonal from the top-right corner (20, 175), distance ~4.24
        assert!(circle_rect_overlap(Vec2::new(23.0, 172.0), 5.0, &rect));
        // Inside the bounding band on both axes but outside the rounded corner
        // (distance ~5.66)
        assert!(!circle_rect_overlap(Vec2::new(24.0, 171.0), 5.0, &rect));
    }

    #[test]
    fn test_overlap_far() {
        let rect = paddle_rect();
        assert!(!circle_rect_overlap(Vec2::new(400.0, 225.0), 5.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(15.0, 100.0), 5.0, &rect));
    }

    proptest! {
        #[test]
        fn prop_overlap_mirror_symmetric(
            dx in -40i32..40,
            dy in -80i32..80,
            radius in 1i32..10,
        ) {
            // Mirroring the ball about the paddle center must not change the result.
            // Integer offsets keep the mirrored positions exact.
            let rect = paddle_rect();
            let c = rect.center();
            let (dx, dy, radius) = (dx as f32, dy as f32, radius as f32);
            let a = circle_rect_overlap(c + Vec2::new(dx, dy), radius, &rect);
            let b = circle_rect_overlap(c + Vec2::new(-dx, dy), radius, &rect);
            let e = circle_rect_overlap(c + Vec2::new(dx, -dy), radius, &rect);
            prop_assert_eq!(a, b);
            prop_assert_eq!(a, e);
        }

        #[test]
        fn prop_center_inside_always_overlaps(
            x in 10.0f32..=20.0,
            y in 175.0f32..=275.0,
        ) {
            prop_assert!(circle_rect_overlap(Vec2::new(x, y), 5.0, &paddle_rect()));
        }
    }
}
