//! Draw primitives and the renderer contract
//!
//! A shadow is painted with exactly two kinds of primitive: an axis-aligned
//! rectangle filled with a linear gradient, and a pie slice filled with a
//! radial gradient. Planners produce `DrawPrimitive` values; anything that can
//! paint them implements `GradientRenderer`.
//!
//! Angles are in degrees and sweep clockwise on screen: 0° points along +x,
//! 90° along +y (down), 180° along -x and 270° along -y.

use crate::{ColorStops, GradientStop, Point, Rect};

/// Graphics surface able to fill the two shadow primitives
///
/// Gradients are clamped: outside the stop range the end colors extend.
pub trait GradientRenderer {
    /// Fill `bounds` with a linear gradient running from `start` to `end`
    fn fill_gradient_rect(&mut self, bounds: Rect, start: Point, end: Point, stops: &[GradientStop]);

    /// Fill a pie slice of the oval inscribed in `bounds` with a radial gradient
    ///
    /// The slice starts at `start_angle` and sweeps `sweep_angle` degrees; the
    /// gradient is centered at `center` and reaches its last stop at `radius`.
    fn fill_gradient_arc(
        &mut self,
        center: Point,
        radius: f32,
        stops: &[GradientStop],
        start_angle: f32,
        sweep_angle: f32,
        bounds: Rect,
    );
}

/// A single shadow draw operation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawPrimitive {
    /// Axis-aligned rectangle filled with a linear gradient
    GradientRect {
        bounds: Rect,
        /// Gradient axis start (first stop)
        start: Point,
        /// Gradient axis end (last stop)
        end: Point,
        stops: ColorStops,
    },
    /// Pie slice filled with a radial gradient
    GradientArc {
        center: Point,
        radius: f32,
        stops: ColorStops,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees, clockwise
        sweep_angle: f32,
        /// Oval the slice is cut from
        bounds: Rect,
    },
}

impl DrawPrimitive {
    pub fn bounds(&self) -> Rect {
        match self {
            DrawPrimitive::GradientRect { bounds, .. } => *bounds,
            DrawPrimitive::GradientArc { bounds, .. } => *bounds,
        }
    }

    pub fn stops(&self) -> &ColorStops {
        match self {
            DrawPrimitive::GradientRect { stops, .. } => stops,
            DrawPrimitive::GradientArc { stops, .. } => stops,
        }
    }

    pub fn is_rect(&self) -> bool {
        matches!(self, DrawPrimitive::GradientRect { .. })
    }

    /// Region this primitive can paint
    ///
    /// For a rectangle this is its bounds. For a quarter slice starting on a
    /// multiple of 90° it is the quadrant of the oval's bounds being swept;
    /// other slices report the whole oval bounds.
    pub fn coverage(&self) -> Rect {
        match self {
            DrawPrimitive::GradientRect { bounds, .. } => *bounds,
            DrawPrimitive::GradientArc {
                start_angle,
                sweep_angle,
                bounds,
                ..
            } => {
                let start = start_angle.rem_euclid(360.0);
                if *sweep_angle != 90.0 || start % 90.0 != 0.0 {
                    return *bounds;
                }
                let center = bounds.center();
                let [left, top, right, bottom] = bounds.to_ltrb();
                match start as u32 {
                    0 => Rect::from_ltrb(center.x, center.y, right, bottom),
                    90 => Rect::from_ltrb(left, center.y, center.x, bottom),
                    180 => Rect::from_ltrb(left, top, center.x, center.y),
                    _ => Rect::from_ltrb(center.x, top, right, center.y),
                }
            }
        }
    }

    /// True when the primitive cannot put any pixel on screen
    pub fn is_degenerate(&self) -> bool {
        match self {
            DrawPrimitive::GradientRect { bounds, .. } => bounds.is_empty(),
            DrawPrimitive::GradientArc {
                radius,
                sweep_angle,
                bounds,
                ..
            } => radius.is_nan() || *radius <= 0.0 || *sweep_angle == 0.0 || bounds.is_empty(),
        }
    }

    /// Hand this primitive to a renderer
    pub fn render(&self, renderer: &mut dyn GradientRenderer) {
        match self {
            DrawPrimitive::GradientRect {
                bounds,
                start,
                end,
                stops,
            } => renderer.fill_gradient_rect(*bounds, *start, *end, stops),
            DrawPrimitive::GradientArc {
                center,
                radius,
                stops,
                start_angle,
                sweep_angle,
                bounds,
            } => renderer.fill_gradient_arc(
                *center,
                *radius,
                stops,
                *start_angle,
                *sweep_angle,
                *bounds,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[derive(Default)]
    struct Counter {
        rects: usize,
        arcs: usize,
    }

    impl GradientRenderer for Counter {
        fn fill_gradient_rect(&mut self, _: Rect, _: Point, _: Point, _: &[GradientStop]) {
            self.rects += 1;
        }

        fn fill_gradient_arc(&mut self, _: Point, _: f32, _: &[GradientStop], _: f32, _: f32, _: Rect) {
            self.arcs += 1;
        }
    }

    fn arc(start_angle: f32) -> DrawPrimitive {
        DrawPrimitive::GradientArc {
            center: Point::new(10.0, 10.0),
            radius: 10.0,
            stops: ColorStops::edge(Color::BLACK),
            start_angle,
            sweep_angle: 90.0,
            bounds: Rect::from_ltrb(0.0, 0.0, 20.0, 20.0),
        }
    }

    #[test]
    fn test_arc_coverage_quadrants() {
        assert_eq!(arc(180.0).coverage().to_ltrb(), [0.0, 0.0, 10.0, 10.0]);
        assert_eq!(arc(270.0).coverage().to_ltrb(), [10.0, 0.0, 20.0, 10.0]);
        assert_eq!(arc(0.0).coverage().to_ltrb(), [10.0, 10.0, 20.0, 20.0]);
        assert_eq!(arc(90.0).coverage().to_ltrb(), [0.0, 10.0, 10.0, 20.0]);
    }

    #[test]
    fn test_degenerate() {
        let strip = DrawPrimitive::GradientRect {
            bounds: Rect::from_ltrb(0.0, 0.0, 0.0, 100.0),
            start: Point::ZERO,
            end: Point::ZERO,
            stops: ColorStops::edge(Color::BLACK),
        };
        assert!(strip.is_degenerate());
        assert!(!arc(0.0).is_degenerate());
    }

    #[test]
    fn test_render_dispatch() {
        let mut counter = Counter::default();
        arc(90.0).render(&mut counter);
        DrawPrimitive::GradientRect {
            bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
            start: Point::ZERO,
            end: Point::new(10.0, 0.0),
            stops: ColorStops::edge(Color::BLACK),
        }
        .render(&mut counter);
        assert_eq!((counter.rects, counter.arcs), (1, 1));
    }
}
