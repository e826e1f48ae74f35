//! Side and corner selection
//!
//! `Sides` picks which edges of the view cast a shadow and `Corners` picks
//! which corners are rounded when the shadow shape is a round rectangle.
//!
//! Style attributes written for the Android `FpShadowLayout` widget encode both sets
//! as one hex digit per member (`0x0001`, `0x0010`, `0x0100`, `0x1000`); the
//! `from_legacy_mask` constructors decode that form.

use bitflags::bitflags;
use umbra_core::{Point, Size};

bitflags! {
    /// Edges of the view that receive a shadow
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

bitflags! {
    /// Corners rounded by a round-rectangle shadow
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
        const ALL = Self::TOP_LEFT.bits()
            | Self::TOP_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::BOTTOM_RIGHT.bits();
    }
}

impl Default for Sides {
    fn default() -> Self {
        Sides::ALL
    }
}

impl Default for Corners {
    fn default() -> Self {
        Corners::ALL
    }
}

impl Sides {
    /// Decode the hex-digit mask (`LEFT=0x0001`, `TOP=0x0010`, `RIGHT=0x0100`, `BOTTOM=0x1000`)
    pub fn from_legacy_mask(mask: u32) -> Self {
        let mut sides = Sides::empty();
        for (bit, side) in [
            (0x0001, Sides::LEFT),
            (0x0010, Sides::TOP),
            (0x0100, Sides::RIGHT),
            (0x1000, Sides::BOTTOM),
        ] {
            if mask & bit == bit {
                sides |= side;
            }
        }
        sides
    }

    /// Look up a set by name (`left`, `top`, `right`, `bottom`, `all`, `none`)
    pub fn parse_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Sides::LEFT),
            "top" => Some(Sides::TOP),
            "right" => Some(Sides::RIGHT),
            "bottom" => Some(Sides::BOTTOM),
            "all" => Some(Sides::ALL),
            "none" => Some(Sides::empty()),
            _ => None,
        }
    }

    pub fn has(&self, side: Side) -> bool {
        self.contains(side.flag())
    }
}

impl Corners {
    /// Decode the hex-digit mask (`TOP_LEFT=0x0001`, `BOTTOM_LEFT=0x0010`,
    /// `TOP_RIGHT=0x0100`, `BOTTOM_RIGHT=0x1000`)
    pub fn from_legacy_mask(mask: u32) -> Self {
        let mut corners = Corners::empty();
        for (bit, corner) in [
            (0x0001, Corners::TOP_LEFT),
            (0x0010, Corners::BOTTOM_LEFT),
            (0x0100, Corners::TOP_RIGHT),
            (0x1000, Corners::BOTTOM_RIGHT),
        ] {
            if mask & bit == bit {
                corners |= corner;
            }
        }
        corners
    }

    /// Look up a set by name (`top_left`, `top-left`, `topLeft`, ..., `all`, `none`)
    pub fn parse_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "topleft" | "lefttop" => Some(Corners::TOP_LEFT),
            "topright" | "righttop" => Some(Corners::TOP_RIGHT),
            "bottomleft" | "leftbottom" => Some(Corners::BOTTOM_LEFT),
            "bottomright" | "rightbottom" => Some(Corners::BOTTOM_RIGHT),
            "all" => Some(Corners::ALL),
            "none" => Some(Corners::empty()),
            _ => None,
        }
    }

    pub fn has(&self, corner: Corner) -> bool {
        self.contains(corner.flag())
    }
}

/// A single edge of the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// Paint order used by the planner
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Right, Side::Bottom];

    pub fn flag(self) -> Sides {
        match self {
            Side::Left => Sides::LEFT,
            Side::Top => Sides::TOP,
            Side::Right => Sides::RIGHT,
            Side::Bottom => Sides::BOTTOM,
        }
    }

    /// The two corners at the ends of this side, in reading order
    pub fn corners(self) -> [Corner; 2] {
        match self {
            Side::Left => [Corner::TopLeft, Corner::BottomLeft],
            Side::Top => [Corner::TopLeft, Corner::TopRight],
            Side::Right => [Corner::TopRight, Corner::BottomRight],
            Side::Bottom => [Corner::BottomLeft, Corner::BottomRight],
        }
    }
}

/// A single corner of the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Paint order used by the planner (clockwise from top-left)
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn flag(self) -> Corners {
        match self {
            Corner::TopLeft => Corners::TOP_LEFT,
            Corner::TopRight => Corners::TOP_RIGHT,
            Corner::BottomRight => Corners::BOTTOM_RIGHT,
            Corner::BottomLeft => Corners::BOTTOM_LEFT,
        }
    }

    /// The top or bottom side meeting at this corner
    pub fn horizontal_side(self) -> Side {
        match self {
            Corner::TopLeft | Corner::TopRight => Side::Top,
            Corner::BottomLeft | Corner::BottomRight => Side::Bottom,
        }
    }

    /// The left or right side meeting at this corner
    pub fn vertical_side(self) -> Side {
        match self {
            Corner::TopLeft | Corner::BottomLeft => Side::Left,
            Corner::TopRight | Corner::BottomRight => Side::Right,
        }
    }

    /// The view's corner point
    pub fn outer_point(self, size: Size) -> Point {
        match self {
            Corner::TopLeft => Point::ZERO,
            Corner::TopRight => Point::new(size.width, 0.0),
            Corner::BottomRight => Point::new(size.width, size.height),
            Corner::BottomLeft => Point::new(0.0, size.height),
        }
    }

    /// Unit step pointing from the corner into the view, as `(dx, dy)`
    pub fn inward(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (1.0, 1.0),
            Corner::TopRight => (-1.0, 1.0),
            Corner::BottomRight => (-1.0, -1.0),
            Corner::BottomLeft => (1.0, -1.0),
        }
    }

    /// Start angle of the quadrant facing away from the view
    pub fn outward_start_angle(self) -> f32 {
        match self {
            Corner::TopLeft => 180.0,
            Corner::TopRight => 270.0,
            Corner::BottomRight => 0.0,
            Corner::BottomLeft => 90.0,
        }
    }
}
