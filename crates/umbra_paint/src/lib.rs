//! Umbra Paint
//!
//! Backends for the `GradientRenderer` contract:
//!
//! - `PaintContext` records primitives for later inspection or replay
//! - `PixmapRenderer` rasterizes them on the CPU with tiny-skia
//!
//! # Example
//!
//! ```rust
//! use umbra_core::{Color, ColorStops, DrawPrimitive, Point, Rect};
//! use umbra_paint::{PaintContext, PixmapRenderer};
//!
//! let mut ctx = PaintContext::new(100.0, 100.0);
//! DrawPrimitive::GradientRect {
//!     bounds: Rect::from_ltrb(0.0, 0.0, 10.0, 100.0),
//!     start: Point::new(10.0, 0.0),
//!     end: Point::ZERO,
//!     stops: ColorStops::edge(Color::BLACK),
//! }
//! .render(&mut ctx);
//!
//! let mut renderer = PixmapRenderer::new(100, 100).unwrap();
//! ctx.replay(&mut renderer);
//! assert!(renderer.alpha_at(5, 50) > 0);
//! ```

pub mod context;
pub mod error;
pub mod raster;

pub use context::PaintContext;
pub use error::{PaintError, Result};
pub use raster::PixmapRenderer;

pub use umbra_core::{Color, DrawPrimitive, GradientRenderer, GradientStop, Point, Rect, Size};
