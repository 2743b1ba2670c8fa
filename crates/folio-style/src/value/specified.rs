//! Raw declaration values, as handed over by the upstream parser.
//!
//! [§ 6.1.1 Specified values](https://www.w3.org/TR/CSS2/cascade.html#specified-value)

use serde::Serialize;

/// A declared value before coercion.
///
/// The shape mirrors CSS component values: the parser has already split the
/// text into keywords, numbers, dimensions and functions, but nothing has been
/// checked against the property it is declared for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum SpecifiedValue {
    /// [§ 6.2.1 The 'inherit' value](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
    Inherit,
    /// [§ 7.3.1 Resetting a Property: the initial keyword](https://www.w3.org/TR/css-cascade-4/#initial)
    Initial,
    /// A keyword such as `block` or `small`.
    Ident(String),
    /// A bare `<number>`.
    Number(f32),
    /// A `<percentage>`.
    Percentage(f32),
    /// A `<dimension>`: a number followed by a unit.
    Dimension {
        /// The numeric part.
        value: f32,
        /// The unit, as written.
        unit: String,
    },
    /// A hash token (`#ff8800`), without the leading `#`.
    Hash(String),
    /// A quoted string.
    Str(String),
    /// A `url(...)` reference.
    Url(String),
    /// A functional notation such as `linear-gradient(...)` or `running(header)`.
    Function {
        /// The function name, without the parenthesis.
        name: String,
        /// The arguments, commas already removed.
        args: Vec<SpecifiedValue>,
    },
    /// A space- or comma-separated list.
    List(Vec<SpecifiedValue>),
}

impl SpecifiedValue {
    /// A keyword.
    #[must_use]
    pub fn ident(keyword: &str) -> Self {
        Self::Ident(keyword.to_string())
    }

    /// A length in CSS pixels.
    #[must_use]
    pub fn px(value: f32) -> Self {
        Self::dimension(value, "px")
    }

    /// A dimension in an arbitrary unit.
    #[must_use]
    pub fn dimension(value: f32, unit: &str) -> Self {
        Self::Dimension {
            value,
            unit: unit.to_string(),
        }
    }

    /// A function with the given arguments.
    #[must_use]
    pub fn function(name: &str, args: Vec<Self>) -> Self {
        Self::Function {
            name: name.to_string(),
            args,
        }
    }

    /// The keyword text, if this is a keyword.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(keyword) => Some(keyword),
            _ => None,
        }
    }

    /// View a value as a list: lists yield their items, anything else yields itself.
    #[must_use]
    pub fn items(&self) -> &[Self] {
        match self {
            Self::List(items) => items,
            single => std::slice::from_ref(single),
        }
    }

    /// A short name for the value's shape, for error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Initial => "initial",
            Self::Ident(_) => "keyword",
            Self::Number(_) => "number",
            Self::Percentage(_) => "percentage",
            Self::Dimension { .. } => "dimension",
            Self::Hash(_) => "hash",
            Self::Str(_) => "string",
            Self::Url(_) => "url",
            Self::Function { .. } => "function",
            Self::List(_) => "list",
        }
    }
}
