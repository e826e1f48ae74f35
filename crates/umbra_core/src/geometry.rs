//! Core geometry types
//!
//! All coordinates are device pixels with the origin at the top-left corner of
//! the host view and y growing downward.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True unless both dimensions are strictly positive
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        size.to_rect()
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from its left, top, right and bottom edges
    ///
    /// An edge pair given in the wrong order collapses to zero extent instead of
    /// producing a negative size.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    /// Create a rect from a center point and half extents
    pub fn from_center_half_extents(center: Point, half_width: f32, half_height: f32) -> Self {
        Self::from_ltrb(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        )
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Edges as `[left, top, right, bottom]`
    pub fn to_ltrb(&self) -> [f32; 4] {
        [self.left(), self.top(), self.right(), self.bottom()]
    }

    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// True if the rect covers no area
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Shrink each edge independently
    pub fn inset_by(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::from_ltrb(
            self.left() + left,
            self.top() + top,
            self.right() - right,
            self.bottom() - bottom,
        )
    }

    /// Check if this rect intersects with another
    ///
    /// Rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Get the intersection of two rects (if they overlap)
    pub fn intersection(&self, other: &Rect) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        Some(Self::from_ltrb(
            self.left().max(other.left()),
            self.top().max(other.top()),
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ltrb() {
        let rect = Rect::from_ltrb(10.0, 0.0, 190.0, 10.0);
        assert_eq!(rect, Rect::new(10.0, 0.0, 180.0, 10.0));
        assert_eq!(rect.to_ltrb(), [10.0, 0.0, 190.0, 10.0]);
    }

    #[test]
    fn test_from_ltrb_collapses_inverted_edges() {
        let rect = Rect::from_ltrb(50.0, 0.0, 40.0, 10.0);
        assert_eq!(rect.width(), 0.0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_edge_sharing_rects_do_not_intersect() {
        let left = Rect::from_ltrb(0.0, 0.0, 10.0, 10.0);
        let right = Rect::from_ltrb(10.0, 0.0, 20.0, 10.0);
        assert!(!left.intersects(&right));
        assert_eq!(left.intersection(&right), None);
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
    }

    #[test]
    fn test_inset_by() {
        let content = Size::new(200.0, 100.0)
            .to_rect()
            .inset_by(10.0, 0.0, 10.0, 5.0);
        assert_eq!(content.to_ltrb(), [10.0, 0.0, 190.0, 95.0]);
    }
}
