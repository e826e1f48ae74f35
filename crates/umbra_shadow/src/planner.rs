//! Shadow geometry planner
//!
//! Turns a view size and a `ShadowStyle` into the ordered list of gradient
//! primitives that paint the shadow band.
//!
//! Instead of enumerating every combination of active sides and rounded
//! corners, the planner decides one `CornerTreatment` per corner and derives
//! everything else from it:
//!
//! - a corner's treatment fixes how far the adjacent strips stay away from it
//!   (its *extent*) and which arc, if any, fills it
//! - each active side becomes one strip running between the extents of its two
//!   corners
//!
//! With `s` the shadow thickness and `r` the corner radius, extents are `0` for
//! an open corner, `s` for a square corner shared by two shadowed sides, `s + r`
//! for a rounded corner shared by two shadowed sides, and `r` for a rounded
//! corner with only one shadowed side.
//!
//! A strip next to a rounded corner is *banded*: it is `s + r` deep and its
//! gradient peaks `r` in from the content edge, matching the corner arc. Strips
//! that end at a square corner are plain edge strips `s` deep.

use smallvec::SmallVec;
use umbra_core::{Color, ColorStops, DrawPrimitive, GradientRenderer, Point, Rect, Size};

use crate::{Corner, ShadowStyle, Side};

/// Primitives for one paint pass; at most four strips and four arcs
pub type PrimitiveList = SmallVec<[DrawPrimitive; 8]>;

/// How a single corner of the shadow is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerTreatment {
    /// No arc; an adjacent shadowed side runs flush to the view edge
    Open,
    /// Square corner between two shadowed sides
    RightAngle,
    /// Rounded corner between two shadowed sides
    Rounded,
    /// Rounded corner where only the left or right side is shadowed
    RoundedVertical,
    /// Rounded corner where only the top or bottom side is shadowed
    RoundedHorizontal,
}

impl CornerTreatment {
    pub fn for_corner(style: &ShadowStyle, corner: Corner) -> Self {
        let horizontal = style.sides.has(corner.horizontal_side());
        let vertical = style.sides.has(corner.vertical_side());

        match (style.is_rounded(corner), horizontal, vertical) {
            (true, true, true) => CornerTreatment::Rounded,
            (true, false, true) => CornerTreatment::RoundedVertical,
            (true, true, false) => CornerTreatment::RoundedHorizontal,
            (false, true, true) => CornerTreatment::RightAngle,
            _ => CornerTreatment::Open,
        }
    }

    pub fn is_rounded(self) -> bool {
        matches!(
            self,
            CornerTreatment::Rounded
                | CornerTreatment::RoundedVertical
                | CornerTreatment::RoundedHorizontal
        )
    }
}

/// Resolved lengths for one plan
struct Frame {
    size: Size,
    color: Color,
    thickness: f32,
    radius: f32,
    treatments: [CornerTreatment; 4],
}

impl Frame {
    fn new(size: Size, style: &ShadowStyle) -> Self {
        let style = style.sanitized();
        // Without a band there is nothing to round.
        let radius = if style.thickness > 0.0 {
            style.corner_radius
        } else {
            0.0
        };

        Self {
            size,
            color: style.color,
            thickness: style.thickness,
            radius,
            treatments: Corner::ALL.map(|corner| CornerTreatment::for_corner(&style, corner)),
        }
    }

    fn treatment(&self, corner: Corner) -> CornerTreatment {
        // Indexed in `Corner::ALL` order.
        let index = match corner {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        };
        self.treatments[index]
    }

    fn extent(&self, treatment: CornerTreatment) -> f32 {
        match treatment {
            CornerTreatment::Open => 0.0,
            CornerTreatment::RightAngle => self.thickness,
            CornerTreatment::Rounded => self.thickness + self.radius,
            CornerTreatment::RoundedVertical | CornerTreatment::RoundedHorizontal => self.radius,
        }
    }

    fn edge_stops(&self) -> ColorStops {
        ColorStops::edge(self.color)
    }

    fn banded_stops(&self) -> ColorStops {
        let reach = self.thickness + self.radius;
        let peak = if reach > 0.0 { self.radius / reach } else { 0.0 };
        ColorStops::banded(self.color, peak)
    }

    fn strip(&self, side: Side) -> DrawPrimitive {
        let [lead, trail] = side.corners().map(|corner| self.treatment(corner));
        // A square corner only fits edge strips: two banded strips would both
        // cover the r x r square inside it.
        let banded = (lead.is_rounded() || trail.is_rounded())
            && lead != CornerTreatment::RightAngle
            && trail != CornerTreatment::RightAngle;
        let (depth, stops) = if banded {
            (self.thickness + self.radius, self.banded_stops())
        } else {
            (self.thickness, self.edge_stops())
        };

        let lead = self.extent(lead);
        let trail = self.extent(trail);
        let Size { width, height } = self.size;

        let (bounds, start, end) = match side {
            Side::Left => (
                Rect::from_ltrb(0.0, lead, depth, height - trail),
                Point::new(depth, 0.0),
                Point::ZERO,
            ),
            Side::Top => (
                Rect::from_ltrb(lead, 0.0, width - trail, depth),
                Point::new(0.0, depth),
                Point::ZERO,
            ),
            Side::Right => (
                Rect::from_ltrb(width - depth, lead, width, height - trail),
                Point::new(width - depth, 0.0),
                Point::new(width, 0.0),
            ),
            Side::Bottom => (
                Rect::from_ltrb(lead, height - depth, width - trail, height),
                Point::new(0.0, height - depth),
                Point::new(0.0, height),
            ),
        };

        DrawPrimitive::GradientRect {
            bounds,
            start,
            end,
            stops,
        }
    }

    fn arc(&self, corner: Corner) -> Option<DrawPrimitive> {
        let s = self.thickness;
        let reach = self.thickness + self.radius;

        let (half_width, half_height, radius, stops) = match self.treatment(corner) {
            CornerTreatment::Open => return None,
            CornerTreatment::RightAngle => (s, s, s, self.edge_stops()),
            CornerTreatment::Rounded => (reach, reach, reach, self.banded_stops()),
            CornerTreatment::RoundedVertical => (reach, self.radius, reach, self.banded_stops()),
            CornerTreatment::RoundedHorizontal => (self.radius, reach, reach, self.banded_stops()),
        };

        let outer = corner.outer_point(self.size);
        let (dx, dy) = corner.inward();
        let center = Point::new(outer.x + dx * half_width, outer.y + dy * half_height);

        Some(DrawPrimitive::GradientArc {
            center,
            radius,
            stops,
            start_angle: corner.outward_start_angle(),
            sweep_angle: 90.0,
            bounds: Rect::from_center_half_extents(center, half_width, half_height),
        })
    }
}

/// Plan the shadow for a view of the given size
///
/// Strips come first (top, left, right, bottom), then corner arcs clockwise
/// from the top-left. A non-positive width or height yields no primitives.
pub fn plan(bounds: Size, style: &ShadowStyle) -> PrimitiveList {
    let mut primitives = PrimitiveList::new();

    if bounds.is_empty() {
        tracing::trace!("Skipping shadow plan for empty bounds {:?}", bounds);
        return primitives;
    }

    let frame = Frame::new(bounds, style);

    for side in Side::ALL {
        if style.sides.has(side) {
            primitives.push(frame.strip(side));
        }
    }

    for corner in Corner::ALL {
        if let Some(arc) = frame.arc(corner) {
            primitives.push(arc);
        }
    }

    tracing::trace!(
        "Planned {} shadow primitives for {}x{} ({:?}, sides {:?})",
        primitives.len(),
        bounds.width,
        bounds.height,
        style.shape,
        style.sides
    );

    primitives
}

/// Plan the shadow and hand every primitive to `renderer`
///
/// Returns the number of primitives drawn.
pub fn paint(bounds: Size, style: &ShadowStyle, renderer: &mut dyn GradientRenderer) -> usize {
    let primitives = plan(bounds, style);
    for primitive in &primitives {
        primitive.render(renderer);
    }
    primitives.len()
}
