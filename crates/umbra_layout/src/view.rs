//! Shadowed view state
//!
//! `ShadowLayout` is what a host container holds for a view that draws its own
//! shadow. It answers the layout pass with the padding to reserve, records the
//! size it was given, and paints the planned primitives on demand. Style
//! changes mark the view for both a new layout and a repaint.

use bitflags::bitflags;
use umbra_core::{Color, GradientRenderer, Rect, Size};
use umbra_shadow::{
    padding_for, Corners, EdgeInsets, PrimitiveList, ShadowShape, ShadowStyle, Sides,
};

use crate::attributes::{DisplayMetrics, ShadowAttributes};

bitflags! {
    /// Work the host still owes the view
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Padding may have changed; measure again
        const LAYOUT = 1 << 0;
        /// Shadow must be repainted
        const PAINT = 1 << 1;
    }
}

/// A view that paints a shadow inside its own bounds
#[derive(Clone, Debug)]
pub struct ShadowLayout {
    style: ShadowStyle,
    size: Size,
    invalidation: Invalidation,
}

impl ShadowLayout {
    pub fn new(style: ShadowStyle) -> Self {
        Self {
            style,
            size: Size::ZERO,
            invalidation: Invalidation::all(),
        }
    }

    /// Build from loaded attributes; malformed options fall back to defaults
    pub fn from_attributes(attributes: &ShadowAttributes, metrics: &DisplayMetrics) -> Self {
        Self::new(attributes.resolve(metrics))
    }

    pub fn style(&self) -> &ShadowStyle {
        &self.style
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn invalidation(&self) -> Invalidation {
        self.invalidation
    }

    pub fn needs_layout(&self) -> bool {
        self.invalidation.contains(Invalidation::LAYOUT)
    }

    pub fn needs_paint(&self) -> bool {
        self.invalidation.contains(Invalidation::PAINT)
    }

    /// Padding the content must be inset by
    pub fn padding(&self) -> EdgeInsets {
        padding_for(&self.style)
    }

    /// Layout pass: report the padding and clear the pending layout
    pub fn measure(&mut self) -> EdgeInsets {
        self.invalidation.remove(Invalidation::LAYOUT);
        let padding = self.padding();
        tracing::debug!("Measured shadow padding {:?}", padding);
        padding
    }

    /// Record the size assigned by the host; returns true if it changed
    pub fn on_size_changed(&mut self, width: f32, height: f32) -> bool {
        let size = Size::new(width, height);
        if size == self.size {
            return false;
        }
        tracing::debug!("Shadow view resized {:?} -> {:?}", self.size, size);
        self.size = size;
        self.invalidation.insert(Invalidation::PAINT);
        true
    }

    /// Area left for content once the padding is applied
    pub fn content_rect(&self) -> Rect {
        let padding = self.padding();
        self.size
            .to_rect()
            .inset_by(padding.left, padding.top, padding.right, padding.bottom)
    }

    /// Primitives for the current size and style
    pub fn primitives(&self) -> PrimitiveList {
        umbra_shadow::plan(self.size, &self.style)
    }

    /// Paint pass: draw the shadow and clear the pending repaint
    pub fn paint(&mut self, renderer: &mut dyn GradientRenderer) -> usize {
        let drawn = umbra_shadow::paint(self.size, &self.style, renderer);
        self.invalidation.remove(Invalidation::PAINT);
        drawn
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.style.color = color;
        self.request_layout("shadow color");
    }

    /// Set the band thickness in device pixels
    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.style.thickness = radius.max(0.0);
        self.request_layout("shadow radius");
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = radius.max(0.0);
        self.request_layout("corner radius");
    }

    pub fn set_sides(&mut self, sides: Sides) {
        self.style.sides = sides;
        self.request_layout("shadow sides");
    }

    pub fn set_corners(&mut self, corners: Corners) {
        self.style.corners = corners;
        self.request_layout("rounded corners");
    }

    pub fn set_shape(&mut self, shape: ShadowShape) {
        self.style.shape = shape;
        self.request_layout("shadow shape");
    }

    fn request_layout(&mut self, reason: &str) {
        tracing::debug!("Shadow {} changed, requesting layout and repaint", reason);
        self.invalidation.insert(Invalidation::LAYOUT | Invalidation::PAINT);
    }
}

impl Default for ShadowLayout {
    fn default() -> Self {
        Self::new(ShadowStyle::default())
    }
}
