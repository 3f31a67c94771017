//! Axis-aligned rectangle collision
//!
//! Rectangles that merely share an edge do not collide; overlap has to be
//! strictly positive on both axes.

use glam::Vec2;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self, other)
    }
}

/// Check whether two rectangles overlap
///
/// All four comparisons are strict, so touching edges are not a hit.
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &b));
        assert!(rects_overlap(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);

        // Right edge of a == left edge of b
        let right = Rect::from_xywh(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));

        // Bottom edge of a == top edge of b
        let below = Rect::from_xywh(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));

        // Corner contact only
        let corner = Rect::from_xywh(10.0, 10.0, 5.0, 5.0);
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_xywh(5.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_containment() {
        let outer = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::from_xywh(40.0, 40.0, 1.0, 1.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_degenerate_rect() {
        let a = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        let point = Rect::from_xywh(5.0, 5.0, 0.0, 0.0);
        // A zero-size rect inside a's interior still counts
        assert!(a.overlaps(&point));

        let on_edge = Rect::from_xywh(10.0, 5.0, 0.0, 0.0);
        assert!(!a.overlaps(&on_edge));
    }
}
