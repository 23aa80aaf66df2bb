//! Axis-aligned rectangle overlap
//!
//! Screen space: origin at the top-left corner, x grows right, y grows down.
//! Every entity is treated as the rectangle spanned from its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict intersection test: rectangles that only share an edge don't overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Anything with an on-screen bounding box
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Check whether two entities' bounding boxes intersect
#[inline]
pub fn overlaps(a: &impl Bounded, b: &impl Bounded) -> bool {
    a.bounds().overlaps(&b.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_rects_overlap() {
        let a = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_partial_and_contained_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &Rect::new(9.0, 9.0, 10.0, 10.0)));
        assert!(overlaps(&a, &Rect::new(2.0, 2.0, 1.0, 1.0)));
        // Laser-sized sliver through the middle
        assert!(overlaps(&a, &Rect::new(4.0, -20.0, 5.0, 40.0)));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_separated_rects_never_overlap(a in rect(), gap in 0.0f32..100.0, h in 0.5f32..200.0) {
            let b = Rect::new(a.right() + gap, a.pos.y, 10.0, h);
            prop_assert!(!overlaps(&a, &b));
            let c = Rect::new(a.pos.x, a.bottom() + gap, 10.0, h);
            prop_assert!(!overlaps(&a, &c));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in rect()) {
            prop_assert!(overlaps(&a, &a));
        }
    }
}
