//! Recording paint context
//!
//! `PaintContext` implements `GradientRenderer` by storing every primitive it
//! receives. Recorded primitives can be inspected, taken, or replayed onto
//! another renderer.

use umbra_core::{
    ColorStops, DrawPrimitive, GradientRenderer, GradientStop, Point, Rect, Size,
};

/// Records shadow primitives in paint order
#[derive(Clone, Debug, Default)]
pub struct PaintContext {
    viewport: Size,
    commands: Vec<DrawPrimitive>,
}

impl PaintContext {
    /// Create a new paint context with the given viewport size
    pub fn new(width: f32, height: f32) -> Self {
        Self::from_size(Size::new(width, height))
    }

    /// Create from a Size
    pub fn from_size(viewport: Size) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[DrawPrimitive] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawPrimitive> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Paint every recorded command onto `renderer`, in order
    pub fn replay(&self, renderer: &mut dyn GradientRenderer) {
        for command in &self.commands {
            command.render(renderer);
        }
    }
}

impl GradientRenderer for PaintContext {
    fn fill_gradient_rect(&mut self, bounds: Rect, start: Point, end: Point, stops: &[GradientStop]) {
        self.commands.push(DrawPrimitive::GradientRect {
            bounds,
            start,
            end,
            stops: ColorStops::from_stops(stops.iter().copied()),
        });
    }

    fn fill_gradient_arc(
        &mut self,
        center: Point,
        radius: f32,
        stops: &[GradientStop],
        start_angle: f32,
        sweep_angle: f32,
        bounds: Rect,
    ) {
        self.commands.push(DrawPrimitive::GradientArc {
            center,
            radius,
            stops: ColorStops::from_stops(stops.iter().copied()),
            start_angle,
            sweep_angle,
            bounds,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::Color;

    fn strip() -> DrawPrimitive {
        DrawPrimitive::GradientRect {
            bounds: Rect::from_ltrb(0.0, 0.0, 10.0, 50.0),
            start: Point::new(10.0, 0.0),
            end: Point::ZERO,
            stops: ColorStops::edge(Color::BLACK),
        }
    }

    fn slice() -> DrawPrimitive {
        DrawPrimitive::GradientArc {
            center: Point::new(10.0, 10.0),
            radius: 10.0,
            stops: ColorStops::banded(Color::RED, 0.5),
            start_angle: 180.0,
            sweep_angle: 90.0,
            bounds: Rect::from_ltrb(0.0, 0.0, 20.0, 20.0),
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new(50.0, 50.0);
        slice().render(&mut ctx);
        strip().render(&mut ctx);

        assert_eq!(ctx.commands(), &[slice(), strip()]);
        assert_eq!(ctx.viewport(), Size::new(50.0, 50.0));
    }

    #[test]
    fn test_take_commands_empties_context() {
        let mut ctx = PaintContext::new(50.0, 50.0);
        strip().render(&mut ctx);

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_replay() {
        let mut source = PaintContext::new(50.0, 50.0);
        strip().render(&mut source);
        slice().render(&mut source);

        let mut copy = PaintContext::new(50.0, 50.0);
        source.replay(&mut copy);
        assert_eq!(copy.commands(), source.commands());

        source.clear();
        assert_eq!(source.len(), 0);
        assert_eq!(copy.len(), 2);
    }
}
