//! Shadow attribute loading
//!
//! Attributes use the option names of the Android widget the shadow model
//! comes from:
//!
//! ```toml
//! shadowColor = "#80000000"
//! shadowRadius = "12dp"
//! shadowRoundRadius = "8dp"
//! shadowSide = ["left", "bottom"]
//! shadowShape = "round_rectangle"
//! roundCorner = 0x1111
//! ```
//!
//! Values are kept as written and interpreted at resolve time, so a single
//! malformed option can fall back to its default without rejecting the rest.

use serde::Deserialize;
use thiserror::Error;
use umbra_core::{Color, ColorParseError};
use umbra_shadow::{Corners, ShadowShape, ShadowStyle, Sides};

/// Errors produced while loading or interpreting shadow attributes
#[derive(Error, Debug)]
pub enum AttributeError {
    /// The document is not valid TOML or an option has an unsupported type
    #[error("Attribute parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid {option}: {source}")]
    Color {
        option: &'static str,
        #[source]
        source: ColorParseError,
    },

    #[error("Invalid {option}: '{value}' is not a dimension")]
    Dimension { option: &'static str, value: String },

    #[error("Invalid {option}: unknown value '{value}'")]
    Unknown { option: &'static str, value: String },

    #[error("Invalid {option}: expected {expected}")]
    WrongType {
        option: &'static str,
        expected: &'static str,
    },

    #[error("Unknown option '{0}'")]
    UnknownOption(String),
}

/// Screen density used to convert `dp` dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per density-independent pixel
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Convert density-independent pixels to whole device pixels
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        (dp * self.density + 0.5).trunc()
    }
}

/// A length written as `px`, `dp` or a bare number (device pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    Px(f32),
    Dp(f32),
}

impl Dimension {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (number, unit): (&str, fn(f32) -> Dimension) =
            if let Some(number) = text.strip_suffix("dip").or_else(|| text.strip_suffix("dp")) {
                (number, Dimension::Dp)
            } else if let Some(number) = text.strip_suffix("px") {
                (number, Dimension::Px)
            } else {
                (text, Dimension::Px)
            };

        let value: f32 = number.trim().parse().ok()?;
        value.is_finite().then(|| unit(value))
    }

    pub fn to_px(self, metrics: &DisplayMetrics) -> f32 {
        match self {
            Dimension::Px(px) => px,
            Dimension::Dp(dp) => metrics.dp_to_px(dp),
        }
    }
}

/// A raw option value as written in the attribute file
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

/// Unresolved shadow attributes
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowAttributes {
    pub shadow_color: Option<AttributeValue>,
    pub shadow_radius: Option<AttributeValue>,
    pub shadow_round_radius: Option<AttributeValue>,
    pub shadow_side: Option<AttributeValue>,
    pub shadow_shape: Option<AttributeValue>,
    pub round_corner: Option<AttributeValue>,
    /// Options this loader does not recognize, usually misspellings
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl ShadowAttributes {
    /// Parse an attribute document
    pub fn from_toml_str(source: &str) -> Result<Self, AttributeError> {
        Ok(toml::from_str(source)?)
    }

    pub fn unknown_options(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Resolve to a style, replacing each malformed option with its default
    pub fn resolve(&self, metrics: &DisplayMetrics) -> ShadowStyle {
        for name in self.unknown_options() {
            tracing::warn!("Ignoring unknown shadow option '{}'", name);
        }
        let defaults = ShadowStyle::default();
        ShadowStyle {
            color: or_default(self.color(), defaults.color),
            thickness: or_default(
                self.dimension("shadowRadius", &self.shadow_radius, metrics),
                defaults.thickness,
            ),
            corner_radius: or_default(
                self.dimension("shadowRoundRadius", &self.shadow_round_radius, metrics),
                defaults.corner_radius,
            ),
            sides: or_default(self.sides(), defaults.sides),
            corners: or_default(self.corners(), defaults.corners),
            shape: or_default(self.shape(), defaults.shape),
        }
    }

    /// Resolve to a style, failing on the first malformed option
    pub fn try_resolve(&self, metrics: &DisplayMetrics) -> Result<ShadowStyle, AttributeError> {
        if let Some(name) = self.unknown_options().next() {
            return Err(AttributeError::UnknownOption(name.to_string()));
        }
        let defaults = ShadowStyle::default();
        Ok(ShadowStyle {
            color: self.color()?.unwrap_or(defaults.color),
            thickness: self
                .dimension("shadowRadius", &self.shadow_radius, metrics)?
                .unwrap_or(defaults.thickness),
            corner_radius: self
                .dimension("shadowRoundRadius", &self.shadow_round_radius, metrics)?
                .unwrap_or(defaults.corner_radius),
            sides: self.sides()?.unwrap_or(defaults.sides),
            corners: self.corners()?.unwrap_or(defaults.corners),
            shape: self.shape()?.unwrap_or(defaults.shape),
        })
    }

    fn color(&self) -> Result<Option<Color>, AttributeError> {
        const OPTION: &str = "shadowColor";
        let Some(value) = &self.shadow_color else {
            return Ok(None);
        };
        match value {
            // Platform color ints are signed 32-bit ARGB
            AttributeValue::Integer(argb) => u32::try_from(*argb)
                .or_else(|_| i32::try_from(*argb).map(|argb| argb as u32))
                .map(|argb| Some(Color::from_argb(argb)))
                .map_err(|_| AttributeError::Unknown {
                    option: OPTION,
                    value: argb.to_string(),
                }),
            AttributeValue::Text(text) => Color::parse_hex(text)
                .map(Some)
                .map_err(|source| AttributeError::Color {
                    option: OPTION,
                    source,
                }),
            _ => Err(AttributeError::WrongType {
                option: OPTION,
                expected: "a '#AARRGGBB' string or an ARGB integer",
            }),
        }
    }

    fn dimension(
        &self,
        option: &'static str,
        value: &Option<AttributeValue>,
        metrics: &DisplayMetrics,
    ) -> Result<Option<f32>, AttributeError> {
        let Some(value) = value else {
            return Ok(None);
        };
        let dimension = match value {
            AttributeValue::Integer(px) => Dimension::Px(*px as f32),
            AttributeValue::Float(px) if px.is_finite() => Dimension::Px(*px as f32),
            AttributeValue::Text(text) => {
                Dimension::parse(text).ok_or_else(|| AttributeError::Dimension {
                    option,
                    value: text.clone(),
                })?
            }
            AttributeValue::Float(px) => {
                return Err(AttributeError::Dimension {
                    option,
                    value: px.to_string(),
                })
            }
            AttributeValue::List(_) => {
                return Err(AttributeError::WrongType {
                    option,
                    expected: "a dimension such as \"12dp\" or 8",
                })
            }
        };

        let px = dimension.to_px(metrics);
        if px < 0.0 {
            tracing::debug!("Clamping negative {} ({}) to 0", option, px);
            return Ok(Some(0.0));
        }
        Ok(Some(px))
    }

    fn sides(&self) -> Result<Option<Sides>, AttributeError> {
        flags(
            "shadowSide",
            &self.shadow_side,
            Sides::from_legacy_mask,
            Sides::parse_name,
        )
    }

    fn corners(&self) -> Result<Option<Corners>, AttributeError> {
        flags(
            "roundCorner",
            &self.round_corner,
            Corners::from_legacy_mask,
            Corners::parse_name,
        )
    }

    fn shape(&self) -> Result<Option<ShadowShape>, AttributeError> {
        const OPTION: &str = "shadowShape";
        let Some(value) = &self.shadow_shape else {
            return Ok(None);
        };
        let shape = match value {
            AttributeValue::Integer(legacy) => u32::try_from(*legacy)
                .ok()
                .and_then(ShadowShape::from_legacy)
                .ok_or_else(|| AttributeError::Unknown {
                    option: OPTION,
                    value: format!("{legacy:#06x}"),
                })?,
            AttributeValue::Text(name) => {
                ShadowShape::parse_name(name).ok_or_else(|| AttributeError::Unknown {
                    option: OPTION,
                    value: name.clone(),
                })?
            }
            _ => {
                return Err(AttributeError::WrongType {
                    option: OPTION,
                    expected: "\"rectangle\" or \"round_rectangle\"",
                })
            }
        };
        Ok(Some(shape))
    }
}

/// Decode a flag option: a legacy mask, a name, `a|b` names, or a list of names
fn flags<F>(
    option: &'static str,
    value: &Option<AttributeValue>,
    from_mask: impl Fn(u32) -> F,
    parse_name: impl Fn(&str) -> Option<F>,
) -> Result<Option<F>, AttributeError>
where
    F: bitflags::Flags + std::ops::BitOr<Output = F>,
{
    let Some(value) = value else {
        return Ok(None);
    };
    let names: Vec<&str> = match value {
        AttributeValue::Integer(mask) => {
            let mask = u32::try_from(*mask).map_err(|_| AttributeError::Unknown {
                option,
                value: mask.to_string(),
            })?;
            return Ok(Some(from_mask(mask)));
        }
        AttributeValue::Text(text) => text.split('|').collect(),
        AttributeValue::List(names) => names.iter().map(String::as_str).collect(),
        AttributeValue::Float(_) => {
            return Err(AttributeError::WrongType {
                option,
                expected: "a mask, a name or a list of names",
            })
        }
    };

    names.into_iter().try_fold(Some(F::empty()), |acc, name| {
        let flag = parse_name(name).ok_or_else(|| AttributeError::Unknown {
            option,
            value: name.trim().to_string(),
        })?;
        Ok(acc.map(|acc| acc | flag))
    })
}

fn or_default<T>(value: Result<Option<T>, AttributeError>, default: T) -> T {
    match value {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(err) => {
            tracing::warn!("{}; using the default", err);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_resolves_to_defaults() {
        let attrs = ShadowAttributes::from_toml_str("").unwrap();
        assert_eq!(attrs.resolve(&DisplayMetrics::default()), ShadowStyle::default());
    }

    #[test]
    fn test_full_document() {
        let attrs = ShadowAttributes::from_toml_str(
            r##"
            shadowColor = "#80FF0000"
            shadowRadius = "12dp"
            shadowRoundRadius = "8px"
            shadowSide = ["left", "bottom"]
            shadowShape = "round_rectangle"
            roundCorner = "top_left|bottom_right"
            "##,
        )
        .unwrap();

        let style = attrs.try_resolve(&DisplayMetrics::new(2.0)).unwrap();
        assert_eq!(style.color, Color::from_argb(0x80FF_0000));
        assert_eq!(style.thickness, 24.0);
        assert_eq!(style.corner_radius, 8.0);
        assert_eq!(style.sides, Sides::LEFT | Sides::BOTTOM);
        assert_eq!(style.shape, ShadowShape::RoundRectangle);
        assert_eq!(style.corners, Corners::TOP_LEFT | Corners::BOTTOM_RIGHT);
    }

    #[test]
    fn test_legacy_masks() {
        let attrs = ShadowAttributes::from_toml_str(
            r#"
            shadowSide = 0x0101
            shadowShape = 0x0100
            roundCorner = 0x0010
            shadowColor = -16777216
            "#,
        )
        .unwrap();

        let style = attrs.try_resolve(&DisplayMetrics::default()).unwrap();
        assert_eq!(style.sides, Sides::LEFT | Sides::RIGHT);
        assert_eq!(style.shape, ShadowShape::RoundRectangle);
        assert_eq!(style.corners, Corners::BOTTOM_LEFT);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_dp_rounding() {
        let metrics = DisplayMetrics::new(3.5);
        assert_eq!(Dimension::Dp(10.0).to_px(&metrics), 35.0);
        assert_eq!(Dimension::Dp(1.0).to_px(&DisplayMetrics::new(1.5)), 2.0);
        assert_eq!(Dimension::Px(7.5).to_px(&metrics), 7.5);
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!(Dimension::parse("12dp"), Some(Dimension::Dp(12.0)));
        assert_eq!(Dimension::parse("4 dip"), Some(Dimension::Dp(4.0)));
        assert_eq!(Dimension::parse("8px"), Some(Dimension::Px(8.0)));
        assert_eq!(Dimension::parse(" 3.5 "), Some(Dimension::Px(3.5)));
        assert_eq!(Dimension::parse("wide"), None);
        assert_eq!(Dimension::parse("NaNdp"), None);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let attrs = ShadowAttributes::from_toml_str(
            r#"
            shadowColor = "red"
            shadowRadius = "10dp"
            shadowSide = ["left", "diagonal"]
            shadowShape = "oval"
            "#,
        )
        .unwrap();

        let style = attrs.resolve(&DisplayMetrics::default());
        assert_eq!(style.color, Color::BLACK);
        assert_eq!(style.thickness, 10.0);
        assert_eq!(style.sides, Sides::ALL);
        assert_eq!(style.shape, ShadowShape::Rectangle);
    }

    #[test]
    fn test_strict_resolution_reports_errors() {
        let attrs = ShadowAttributes::from_toml_str(r##"shadowColor = "#12""##).unwrap();
        assert!(matches!(
            attrs.try_resolve(&DisplayMetrics::default()),
            Err(AttributeError::Color { option: "shadowColor", .. })
        ));

        let attrs = ShadowAttributes::from_toml_str(r#"shadowSide = "up""#).unwrap();
        match attrs.try_resolve(&DisplayMetrics::default()) {
            Err(AttributeError::Unknown { option, value }) => {
                assert_eq!(option, "shadowSide");
                assert_eq!(value, "up");
            }
            other => panic!("expected unknown side, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_options_are_reported() {
        let attrs = ShadowAttributes::from_toml_str(
            r#"
            shadowRadious = 4
            shadowSide = "left"
            "#,
        )
        .unwrap();
        assert_eq!(attrs.unknown_options().collect::<Vec<_>>(), ["shadowRadious"]);

        let style = attrs.resolve(&DisplayMetrics::default());
        assert_eq!(style.thickness, ShadowStyle::default().thickness);
        assert_eq!(style.sides, Sides::LEFT);

        match attrs.try_resolve(&DisplayMetrics::default()) {
            Err(AttributeError::UnknownOption(name)) => assert_eq!(name, "shadowRadious"),
            other => panic!("expected unknown option, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_dimensions_are_clamped() {
        let attrs = ShadowAttributes::from_toml_str(
            r#"
            shadowRadius = -6
            shadowRoundRadius = "-2dp"
            "#,
        )
        .unwrap();
        let style = attrs.try_resolve(&DisplayMetrics::new(2.0)).unwrap();
        assert_eq!(style.thickness, 0.0);
        assert_eq!(style.corner_radius, 0.0);
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            ShadowAttributes::from_toml_str("shadowRadius = "),
            Err(AttributeError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_side_list_disables_shadow() {
        let attrs = ShadowAttributes::from_toml_str("shadowSide = []").unwrap();
        let style = attrs.try_resolve(&DisplayMetrics::default()).unwrap();
        assert_eq!(style.sides, Sides::empty());
    }
}
