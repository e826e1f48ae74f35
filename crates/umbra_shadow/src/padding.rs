//! Padding reserved for the shadow band

use crate::{Side, ShadowStyle};

/// Per-side insets, in device pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Padding the host must apply so content never sits under the shadow
///
/// Each active side reserves the shadow thickness; inactive sides reserve nothing.
pub fn padding_for(style: &ShadowStyle) -> EdgeInsets {
    let thickness = crate::style::non_negative(style.thickness);
    let inset = |side: Side| {
        if style.sides.has(side) {
            thickness
        } else {
            0.0
        }
    };

    EdgeInsets::new(
        inset(Side::Left),
        inset(Side::Top),
        inset(Side::Right),
        inset(Side::Bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShadowShape, Sides};
    use umbra_core::Color;

    #[test]
    fn test_all_sides() {
        let style = ShadowStyle::new().with_thickness(12.0);
        assert_eq!(padding_for(&style), EdgeInsets::uniform(12.0));
    }

    #[test]
    fn test_inactive_sides_get_no_padding() {
        let style = ShadowStyle::new()
            .with_thickness(6.0)
            .with_sides(Sides::LEFT | Sides::BOTTOM);
        assert_eq!(padding_for(&style), EdgeInsets::new(6.0, 0.0, 0.0, 6.0));
    }

    #[test]
    fn test_padding_is_idempotent() {
        let style = ShadowStyle::new()
            .with_thickness(9.5)
            .with_sides(Sides::TOP | Sides::RIGHT);
        assert_eq!(padding_for(&style), padding_for(&style));
    }

    #[test]
    fn test_padding_ignores_color_shape_and_radius() {
        let base = ShadowStyle::new().with_thickness(4.0).with_sides(Sides::TOP);
        let other = base
            .clone()
            .with_color(Color::RED)
            .with_shape(ShadowShape::RoundRectangle)
            .with_corner_radius(30.0);
        assert_eq!(padding_for(&base), padding_for(&other));
    }

    #[test]
    fn test_negative_thickness_reserves_nothing() {
        let style = ShadowStyle::new().with_thickness(-3.0);
        assert_eq!(padding_for(&style), EdgeInsets::ZERO);
    }
}
