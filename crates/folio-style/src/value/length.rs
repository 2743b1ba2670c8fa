//! CSS Length values
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

/// User agent default font size (`medium`), in CSS pixels.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1in = 2.54cm = 96px"
const PX_PER_IN: f32 = 96.0;

/// Units a [`LengthValue`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// "1pt = 1/72nd of 1in"
    Pt,
    /// "1pc = 1/6th of 1in"
    Pc,
    /// "1in = 2.54cm = 96px"
    In,
    /// "1cm = 96px/2.54"
    Cm,
    /// "1mm = 1/10th of 1cm"
    Mm,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element
    /// on which it is used."
    Em,
    /// "Equal to the used x-height of the first available font"
    Ex,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "Percentages are always relative to another quantity"
    #[serde(rename = "%")]
    Percent,
}

impl LengthUnit {
    /// Map a dimension unit (or `%`) to a length unit, case-insensitively.
    #[must_use]
    pub fn from_unit(unit: &str) -> Option<Self> {
        let unit = match unit.to_ascii_lowercase().as_str() {
            "px" => Self::Px,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            "in" => Self::In,
            "cm" => Self::Cm,
            "mm" => Self::Mm,
            "em" => Self::Em,
            "ex" => Self::Ex,
            "%" => Self::Percent,
            _ => return None,
        };
        Some(unit)
    }

    /// CSS pixels per unit for absolute units; `None` for relative ones.
    #[must_use]
    pub const fn px_per_unit(self) -> Option<f32> {
        match self {
            Self::Px => Some(1.0),
            Self::Pt => Some(PX_PER_IN / 72.0),
            Self::Pc => Some(PX_PER_IN / 6.0),
            Self::In => Some(PX_PER_IN),
            Self::Cm => Some(PX_PER_IN / 2.54),
            Self::Mm => Some(PX_PER_IN / 25.4),
            Self::Em | Self::Ex | Self::Percent => None,
        }
    }
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
///
/// Percentages are folded in here as well: every property that accepts one
/// resolves it proportionally, exactly like a relative length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthValue {
    /// The numeric part.
    pub value: f32,
    /// The unit part.
    pub unit: LengthUnit,
}

impl LengthValue {
    /// A length of `value` in `unit`.
    #[must_use]
    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// A length in CSS pixels.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    /// A percentage.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// Whether the unit is fixed, i.e. resolvable without a font or a
    /// containing block.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.unit.px_per_unit().is_some()
    }

    /// The length in CSS pixels, for absolute units only.
    #[must_use]
    pub fn to_px(&self) -> Option<f32> {
        self.unit.px_per_unit().map(|ratio| self.value * ratio)
    }
}

/// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
///
/// "Some properties can take the keyword 'auto' as a value. This keyword
/// allows the user agent to compute the value based on other properties."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AutoLength {
    /// The value is 'auto' and will be resolved during layout.
    Auto,
    /// A specific length value (px, em, %, etc.).
    Length(LengthValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_absolute_units_convert_to_px() {
        assert!(approx(LengthValue::px(12.0).to_px().unwrap_or_default(), 12.0));
        assert!(approx(
            LengthValue::new(72.0, LengthUnit::Pt).to_px().unwrap_or_default(),
            96.0
        ));
        assert!(approx(
            LengthValue::new(1.0, LengthUnit::In).to_px().unwrap_or_default(),
            96.0
        ));
        assert!(approx(
            LengthValue::new(2.54, LengthUnit::Cm).to_px().unwrap_or_default(),
            96.0
        ));
        assert!(approx(
            LengthValue::new(1.0, LengthUnit::Pc).to_px().unwrap_or_default(),
            16.0
        ));
    }

    #[test]
    fn test_relative_units_have_no_px_value() {
        assert_eq!(LengthValue::new(2.0, LengthUnit::Em).to_px(), None);
        assert_eq!(LengthValue::percent(50.0).to_px(), None);
        assert!(!LengthValue::new(1.0, LengthUnit::Ex).is_absolute());
        assert!(LengthValue::new(1.0, LengthUnit::Mm).is_absolute());
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(LengthUnit::from_unit("PX"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::from_unit("%"), Some(LengthUnit::Percent));
        assert_eq!(LengthUnit::from_unit("vw"), None);
    }
}
