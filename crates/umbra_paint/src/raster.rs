//! CPU rasterization with tiny-skia
//!
//! `PixmapRenderer` paints shadow primitives into an RGBA pixmap. Strips are
//! filled with a linear gradient shader; arcs are pie slices of the oval
//! inscribed in their bounds, filled with a radial gradient shader.

use std::path::Path;

use tiny_skia::{
    FillRule, LinearGradient, Paint, PathBuilder, Pixmap, RadialGradient, Shader, SpreadMode,
    Transform,
};
use umbra_core::{Color, GradientRenderer, GradientStop, Point, Rect};

use crate::error::{PaintError, Result};

/// Rasterizes primitives into an owned pixmap
pub struct PixmapRenderer {
    pixmap: Pixmap,
}

impl PixmapRenderer {
    /// Create a transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(PaintError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Fill the whole surface with `color`
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Alpha of the pixel at `(x, y)`, or 0 outside the surface
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| PaintError::Encode(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .map_err(|e| PaintError::Encode(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Wrote {}x{} PNG to {}", self.width(), self.height(), path.display());
        Ok(())
    }

    fn fill_with(&mut self, path: &tiny_skia::Path, shader: Shader) {
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Default::default()
        };
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}

impl GradientRenderer for PixmapRenderer {
    fn fill_gradient_rect(&mut self, bounds: Rect, start: Point, end: Point, stops: &[GradientStop]) {
        let [left, top, right, bottom] = bounds.to_ltrb();
        let Some(rect) = tiny_skia::Rect::from_ltrb(left, top, right, bottom) else {
            tracing::trace!("Skipping empty gradient rect {:?}", bounds);
            return;
        };
        let Some(shader) = LinearGradient::new(
            to_skia_point(start),
            to_skia_point(end),
            to_skia_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            tracing::trace!("Skipping gradient rect with no usable shader");
            return;
        };

        let path = PathBuilder::from_rect(rect);
        self.fill_with(&path, shader);
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
        if radius.is_nan() || radius <= 0.0 || sweep_angle == 0.0 || bounds.is_empty() {
            tracing::trace!("Skipping degenerate gradient arc at {:?}", center);
            return;
        }
        let Some(path) = pie_path(bounds, start_angle, sweep_angle) else {
            return;
        };
        let Some(shader) = RadialGradient::new(
            to_skia_point(center),
            to_skia_point(center),
            radius,
            to_skia_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            tracing::trace!("Skipping gradient arc with no usable shader");
            return;
        };

        self.fill_with(&path, shader);
    }
}

/// Pie slice of the oval inscribed in `bounds`, closed through the oval's center
fn pie_path(bounds: Rect, start_angle: f32, sweep_angle: f32) -> Option<tiny_skia::Path> {
    let center = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    let on_oval = |theta: f32| (center.x + rx * theta.cos(), center.y + ry * theta.sin());
    let tangent = |theta: f32| (-rx * theta.sin(), ry * theta.cos());

    let sweep = sweep_angle.clamp(-360.0, 360.0).to_radians();
    let segments = (sweep.abs() / std::f32::consts::FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    // Cubic approximation of a circular arc of `step` radians
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut builder = PathBuilder::new();
    builder.move_to(center.x, center.y);

    let mut theta = start_angle.to_radians();
    let (x, y) = on_oval(theta);
    builder.line_to(x, y);

    for _ in 0..segments {
        let next = theta + step;
        let (x0, y0) = on_oval(theta);
        let (dx0, dy0) = tangent(theta);
        let (x1, y1) = on_oval(next);
        let (dx1, dy1) = tangent(next);
        builder.cubic_to(
            x0 + k * dx0,
            y0 + k * dy0,
            x1 - k * dx1,
            y1 - k * dy1,
            x1,
            y1,
        );
        theta = next;
    }

    builder.close();
    builder.finish()
}

fn to_skia_point(point: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(point.x, point.y)
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let channel = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    tiny_skia::Color::from_rgba(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
    .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn to_skia_stops(stops: &[GradientStop]) -> Vec<tiny_skia::GradientStop> {
    stops
        .iter()
        .map(|stop| tiny_skia::GradientStop::new(stop.offset, to_skia_color(stop.color)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::{ColorStops, DrawPrimitive};

    fn left_strip() -> DrawPrimitive {
        DrawPrimitive::GradientRect {
            bounds: Rect::from_ltrb(0.0, 0.0, 10.0, 40.0),
            start: Point::new(10.0, 0.0),
            end: Point::ZERO,
            stops: ColorStops::edge(Color::BLACK),
        }
    }

    fn top_left_arc() -> DrawPrimitive {
        DrawPrimitive::GradientArc {
            center: Point::new(10.0, 10.0),
            radius: 10.0,
            stops: ColorStops::edge(Color::BLACK),
            start_angle: 180.0,
            sweep_angle: 90.0,
            bounds: Rect::from_ltrb(0.0, 0.0, 20.0, 20.0),
        }
    }

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            PixmapRenderer::new(0, 10),
            Err(PaintError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_strip_fades_toward_boundary() {
        let mut renderer = PixmapRenderer::new(40, 40).unwrap();
        left_strip().render(&mut renderer);

        let inner = renderer.alpha_at(9, 20);
        let outer = renderer.alpha_at(1, 20);
        assert!(inner > outer, "inner {inner} outer {outer}");
        assert!(inner > 200);
        assert_eq!(renderer.alpha_at(20, 20), 0);
    }

    #[test]
    fn test_arc_fills_only_its_quadrant() {
        let mut renderer = PixmapRenderer::new(40, 40).unwrap();
        top_left_arc().render(&mut renderer);

        assert!(renderer.alpha_at(8, 8) > 0);
        assert_eq!(renderer.alpha_at(15, 15), 0);
        assert_eq!(renderer.alpha_at(15, 5), 0);
        assert_eq!(renderer.alpha_at(0, 0), 0);
    }

    #[test]
    fn test_degenerate_primitives_paint_nothing() {
        let mut renderer = PixmapRenderer::new(20, 20).unwrap();
        renderer.fill_gradient_rect(
            Rect::from_ltrb(0.0, 0.0, 0.0, 20.0),
            Point::ZERO,
            Point::ZERO,
            &ColorStops::edge(Color::BLACK),
        );
        renderer.fill_gradient_arc(
            Point::ZERO,
            0.0,
            &ColorStops::edge(Color::BLACK),
            180.0,
            90.0,
            Rect::ZERO,
        );
        assert!(renderer.pixmap().pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn test_clear() {
        let mut renderer = PixmapRenderer::new(4, 4).unwrap();
        renderer.clear(Color::WHITE);
        assert_eq!(renderer.alpha_at(2, 2), 255);
        assert_eq!(renderer.alpha_at(10, 10), 0);
    }

    #[test]
    fn test_encode_png() {
        let mut renderer = PixmapRenderer::new(16, 16).unwrap();
        left_strip().render(&mut renderer);
        let png = renderer.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
