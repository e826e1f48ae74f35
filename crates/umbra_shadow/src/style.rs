//! Shadow style configuration

use umbra_core::Color;

use crate::{Corners, Sides};

/// Outline the shadow follows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShadowShape {
    /// Square corners; corner flags are ignored
    #[default]
    Rectangle,
    /// Corners listed in `ShadowStyle::corners` are rounded
    RoundRectangle,
}

impl ShadowShape {
    /// Decode the legacy attribute values (`0x0001` rectangle, `0x0100` round rectangle)
    pub fn from_legacy(value: u32) -> Option<Self> {
        match value {
            0x0001 => Some(ShadowShape::Rectangle),
            0x0100 => Some(ShadowShape::RoundRectangle),
            _ => None,
        }
    }

    pub fn parse_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "rectangle" | "rect" => Some(ShadowShape::Rectangle),
            "roundrectangle" | "roundrect" | "rounded" => Some(ShadowShape::RoundRectangle),
            _ => None,
        }
    }
}

/// Everything the planner needs to know about a shadow
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Color at the darkest point of the shadow
    pub color: Color,
    /// Width of the shadow band, in device pixels
    pub thickness: f32,
    /// Radius of rounded content corners, in device pixels
    pub corner_radius: f32,
    /// Edges that cast a shadow
    pub sides: Sides,
    /// Corners that are rounded when `shape` is `RoundRectangle`
    pub corners: Corners,
    pub shape: ShadowShape,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            thickness: 0.0,
            corner_radius: 0.0,
            sides: Sides::ALL,
            corners: Corners::ALL,
            shape: ShadowShape::Rectangle,
        }
    }
}

impl ShadowStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = corners;
        self
    }

    pub fn with_shape(mut self, shape: ShadowShape) -> Self {
        self.shape = shape;
        self
    }

    /// Shorthand for a round-rectangle shadow with the given corner radius
    pub fn rounded(self, radius: f32) -> Self {
        self.with_shape(ShadowShape::RoundRectangle)
            .with_corner_radius(radius)
    }

    /// Copy with negative or NaN lengths replaced by zero
    pub fn sanitized(&self) -> Self {
        Self {
            thickness: non_negative(self.thickness),
            corner_radius: non_negative(self.corner_radius),
            ..self.clone()
        }
    }

    /// True if `corner` gets the rounded treatment
    pub fn is_rounded(&self, corner: crate::Corner) -> bool {
        self.shape == ShadowShape::RoundRectangle && self.corners.has(corner)
    }
}

pub(crate) fn non_negative(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
