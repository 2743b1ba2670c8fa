//! Resolved property values.
//!
//! [§ 6.1.2 Computed values](https://www.w3.org/TR/CSS2/cascade.html#computed-value)
//!
//! One closed sum type covers every value shape a property can resolve to.
//! Consumers match on it instead of downcasting.

use serde::Serialize;

use super::{ColorValue, Ident, LengthValue};
use crate::error::StyleError;
use crate::property::Property;

/// A functional value kept for later interpretation (gradients,
/// `running(name)`, `counter(name)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionValue {
    /// The lowercased function name.
    pub name: String,
    /// The coerced arguments.
    pub args: Vec<ResolvedValue>,
}

impl FunctionValue {
    /// [§ 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
    ///
    /// `linear-gradient()`, `radial-gradient()` and their repeating forms.
    #[must_use]
    pub fn is_gradient(&self) -> bool {
        self.name.ends_with("-gradient")
    }
}

/// [§ 12.4 Automatic counters](https://www.w3.org/TR/CSS2/generate.html#counters)
///
/// One `<identifier> <integer>?` entry of `counter-reset` or `counter-increment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterData {
    /// The counter name.
    pub name: String,
    /// The value to reset to, or the amount to increment by.
    pub value: i32,
}

/// The resolved value of one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ResolvedValue {
    /// A keyword.
    Ident(Ident),
    /// A length or percentage, still to be resolved proportionally.
    Length(LengthValue),
    /// A bare number (`line-height: 1.5`, `z-index`, `font-weight`).
    Number(f32),
    /// A color.
    Color(ColorValue),
    /// An ordered list of strings (`font-family`).
    Strings(Vec<String>),
    /// A `url(...)` reference.
    Uri(String),
    /// A function such as a gradient.
    Function(FunctionValue),
    /// `counter-reset` / `counter-increment` entries.
    Counters(Vec<CounterData>),
    /// A list of values (the background layer properties).
    List(Vec<ResolvedValue>),
}

impl ResolvedValue {
    /// A short name for the value's shape, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ident(_) => "keyword",
            Self::Length(_) => "length",
            Self::Number(_) => "number",
            Self::Color(_) => "color",
            Self::Strings(_) => "string list",
            Self::Uri(_) => "uri",
            Self::Function(_) => "function",
            Self::Counters(_) => "counters",
            Self::List(_) => "list",
        }
    }

    /// The keyword, if this is one.
    #[must_use]
    pub const fn as_ident(&self) -> Option<Ident> {
        match self {
            Self::Ident(ident) => Some(*ident),
            _ => None,
        }
    }

    /// The length, if this is one.
    #[must_use]
    pub const fn as_length(&self) -> Option<LengthValue> {
        match self {
            Self::Length(length) => Some(*length),
            _ => None,
        }
    }

    /// The number, if this is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The color, if this is one.
    #[must_use]
    pub const fn as_color(&self) -> Option<ColorValue> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// The string list, if this is one.
    #[must_use]
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::Strings(strings) => Some(strings),
            _ => None,
        }
    }

    /// The list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The function, if this is one.
    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// The counter entries, if this is a counter list.
    #[must_use]
    pub fn as_counters(&self) -> Option<&[CounterData]> {
        match self {
            Self::Counters(counters) => Some(counters),
            _ => None,
        }
    }

    /// Whether the value is expressed in a fixed unit.
    ///
    /// Numbers count as absolute, keywords never do.
    ///
    /// # Errors
    ///
    /// [`StyleError::UnexpectedValueShape`] for shapes that have no notion of a
    /// unit at all (colors, lists, functions, ...).
    pub fn has_absolute_unit(&self, property: Property) -> Result<bool, StyleError> {
        match self {
            Self::Length(length) => Ok(length.is_absolute()),
            Self::Number(_) => Ok(true),
            Self::Ident(_) => Ok(false),
            other => Err(StyleError::UnexpectedValueShape {
                property,
                expected: "length, number or keyword",
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::LengthUnit;

    #[test]
    fn test_has_absolute_unit_by_shape() {
        let prop = Property::Width;
        assert!(matches!(
            ResolvedValue::Length(LengthValue::px(3.0)).has_absolute_unit(prop),
            Ok(true)
        ));
        assert!(matches!(
            ResolvedValue::Length(LengthValue::new(3.0, LengthUnit::Em)).has_absolute_unit(prop),
            Ok(false)
        ));
        assert!(matches!(
            ResolvedValue::Ident(Ident::Auto).has_absolute_unit(prop),
            Ok(false)
        ));
        assert!(matches!(
            ResolvedValue::Color(ColorValue::BLACK).has_absolute_unit(prop),
            Err(StyleError::UnexpectedValueShape { .. })
        ));
    }

    #[test]
    fn test_gradient_detection() {
        let gradient = FunctionValue {
            name: "repeating-linear-gradient".to_string(),
            args: vec![],
        };
        let running = FunctionValue {
            name: "running".to_string(),
            args: vec![],
        };
        assert!(gradient.is_gradient());
        assert!(!running.is_gradient());
    }
}
