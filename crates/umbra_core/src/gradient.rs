//! Gradient color stops
//!
//! Every shadow primitive is painted with one of two stop layouts:
//!
//! - **edge**: `{color@0, transparent@1}`, full color where the strip meets the
//!   content and fading out toward the view boundary
//! - **banded**: `{transparent@0, color@t, transparent@1}`, used around rounded
//!   corners where the first `t` of the gradient lies inside the content radius

use smallvec::SmallVec;

use crate::Color;

/// Gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    /// Color at this stop
    pub color: Color,
}

impl GradientStop {
    /// Create a new gradient stop
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// An ordered set of gradient stops
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStops(SmallVec<[GradientStop; 3]>);

impl ColorStops {
    /// Stops for a strip whose shadow starts at the content edge
    pub fn edge(color: Color) -> Self {
        Self(smallvec::smallvec![
            GradientStop::new(0.0, color),
            GradientStop::new(1.0, Color::TRANSPARENT_WHITE),
        ])
    }

    /// Stops that stay clear up to `t`, peak at `t` and fade out by 1.0
    pub fn banded(color: Color, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t };
        Self(smallvec::smallvec![
            GradientStop::new(0.0, Color::TRANSPARENT_WHITE),
            GradientStop::new(t, color),
            GradientStop::new(1.0, Color::TRANSPARENT_WHITE),
        ])
    }

    /// Build from arbitrary stops, sorted by offset
    pub fn from_stops(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        let mut stops: SmallVec<[GradientStop; 3]> = stops.into_iter().collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self(stops)
    }

    pub fn as_slice(&self) -> &[GradientStop] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The stop carrying the shadow color: the middle stop of a banded set,
    /// otherwise the first stop
    fn peak(&self) -> Option<&GradientStop> {
        match self.0.as_slice() {
            [_, peak, _] => Some(peak),
            stops => stops.first(),
        }
    }

    /// The shadow color carried by these stops, even when it is transparent
    pub fn shadow_color(&self) -> Option<Color> {
        self.peak().map(|stop| stop.color)
    }

    pub fn peak_offset(&self) -> Option<f32> {
        self.peak().map(|stop| stop.offset)
    }
}

impl std::ops::Deref for ColorStops {
    type Target = [GradientStop];

    fn deref(&self) -> &[GradientStop] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_stops() {
        let stops = ColorStops::edge(Color::BLACK);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0], GradientStop::new(0.0, Color::BLACK));
        assert_eq!(stops[1].offset, 1.0);
        assert!(stops[1].color.is_transparent());
        assert_eq!(stops.peak_offset(), Some(0.0));
    }

    #[test]
    fn test_banded_stops() {
        let stops = ColorStops::banded(Color::RED, 0.25);
        assert_eq!(stops.len(), 3);
        assert!(stops[0].color.is_transparent());
        assert_eq!(stops[1], GradientStop::new(0.25, Color::RED));
        assert!(stops[2].color.is_transparent());
        assert_eq!(stops.shadow_color(), Some(Color::RED));
    }

    #[test]
    fn test_banded_offset_is_clamped() {
        let stops = ColorStops::banded(Color::RED, 1.5);
        assert_eq!(stops.peak_offset(), Some(1.0));
        let stops = ColorStops::banded(Color::RED, f32::NAN);
        assert_eq!(stops.peak_offset(), Some(0.0));
    }

    #[test]
    fn test_from_stops_sorts() {
        let stops = ColorStops::from_stops([
            GradientStop::new(1.0, Color::WHITE),
            GradientStop::new(0.0, Color::BLACK),
        ]);
        assert_eq!(stops[0].color, Color::BLACK);
        assert_eq!(stops[1].color, Color::WHITE);
    }

    #[test]
    fn test_transparent_shadow_color_round_trips() {
        let clear_red = Color::from_argb(0x00FF_0000);
        assert_eq!(ColorStops::edge(clear_red).shadow_color(), Some(clear_red));
        assert_eq!(ColorStops::banded(clear_red, 0.4).shadow_color(), Some(clear_red));
        assert_eq!(ColorStops::banded(clear_red, 0.4).peak_offset(), Some(0.4));
        assert_eq!(ColorStops::default().shadow_color(), None);
    }
}
