//! Umbra Core
//!
//! Foundational types shared by every Umbra crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in device pixels
//! - **Color**: straight-alpha RGBA colors, including the platform's packed ARGB ints
//! - **Gradients**: color stops and the two canonical shadow stop sets
//! - **Draw primitives**: gradient rectangles and gradient arcs, plus the
//!   `GradientRenderer` contract a graphics surface implements to paint them
//!
//! # Example
//!
//! ```rust
//! use umbra_core::{Color, ColorStops, DrawPrimitive, Point, Rect};
//!
//! let strip = DrawPrimitive::GradientRect {
//!     bounds: Rect::from_ltrb(0.0, 0.0, 10.0, 100.0),
//!     start: Point::new(10.0, 0.0),
//!     end: Point::ZERO,
//!     stops: ColorStops::edge(Color::BLACK),
//! };
//!
//! assert_eq!(strip.stops().shadow_color(), Some(Color::BLACK));
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod gradient;

pub use color::{Color, ColorParseError};
pub use draw::{DrawPrimitive, GradientRenderer};
pub use geometry::{Point, Rect, Size};
pub use gradient::{ColorStops, GradientStop};
