//! Umbra Shadow
//!
//! Geometry for a soft drop shadow painted inside a view's own bounds. The
//! host reserves padding on every shadowed side (`padding_for`) and, on each
//! paint pass, asks the planner for the gradient primitives that fill that
//! band (`plan`), or paints them straight onto a renderer (`paint`).
//!
//! # Example
//!
//! ```rust
//! use umbra_core::Size;
//! use umbra_shadow::{padding_for, plan, ShadowStyle, Sides};
//!
//! let style = ShadowStyle::new().with_thickness(10.0).with_sides(Sides::LEFT | Sides::BOTTOM);
//!
//! let padding = padding_for(&style);
//! assert_eq!((padding.left, padding.bottom), (10.0, 10.0));
//!
//! // Two strips and the arc joining them at the bottom-left corner.
//! let primitives = plan(Size::new(200.0, 100.0), &style);
//! assert_eq!(primitives.len(), 3);
//! ```

pub mod padding;
pub mod planner;
pub mod sides;
pub mod style;

pub use padding::{padding_for, EdgeInsets};
pub use planner::{paint, plan, CornerTreatment, PrimitiveList};
pub use sides::{Corner, Corners, Side, Sides};
pub use style::{ShadowShape, ShadowStyle};
