//! Umbra Layout
//!
//! Host-side glue for shadowed views: load shadow attributes from TOML,
//! reserve padding during layout and paint the shadow during draw.
//!
//! # Example
//!
//! ```rust
//! use umbra_layout::{DisplayMetrics, ShadowAttributes, ShadowLayout};
//! use umbra_paint::PaintContext;
//!
//! let attributes = ShadowAttributes::from_toml_str(r#"shadowRadius = "4dp""#).unwrap();
//! let mut view = ShadowLayout::from_attributes(&attributes, &DisplayMetrics::new(2.0));
//!
//! let padding = view.measure();
//! assert_eq!(padding.left, 8.0);
//!
//! view.on_size_changed(120.0, 80.0);
//! let mut ctx = PaintContext::new(120.0, 80.0);
//! assert_eq!(view.paint(&mut ctx), 8);
//! ```

pub mod attributes;
pub mod view;

pub use attributes::{AttributeError, AttributeValue, Dimension, DisplayMetrics, ShadowAttributes};
pub use view::{Invalidation, ShadowLayout};
