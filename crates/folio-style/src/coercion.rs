//! Coercion of raw declared values into resolved values.
//!
//! [§ 6.1 Specified, computed, and actual values](https://www.w3.org/TR/CSS2/cascade.html#value-stages)
//!
//! The cascade hands over values exactly as the parser produced them. The
//! [`ValueCoercion`] service turns each one into the typed shape the property
//! expects, so that every slot of a property table holds a [`ResolvedValue`]
//! the resolver and derived caches can match on exhaustively.

use std::str::FromStr;

use crate::error::StyleError;
use crate::property::Property;
use crate::style::Style;
use crate::value::{
    ColorValue, CounterData, FunctionValue, Ident, LengthUnit, LengthValue, ResolvedValue,
    SpecifiedValue,
};

/// What a coercion may consult besides the raw value.
#[derive(Debug, Clone, Copy)]
pub struct CoercionContext<'a> {
    parent: Option<Style<'a>>,
}

impl<'a> CoercionContext<'a> {
    /// A context for a style whose parent is `parent`.
    #[must_use]
    pub const fn new(parent: Option<Style<'a>>) -> Self {
        Self { parent }
    }

    /// A context with no surrounding style, used for initial values.
    #[must_use]
    pub const fn detached() -> Self {
        Self { parent: None }
    }

    /// The parent of the style under construction, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<Style<'a>> {
        self.parent
    }
}

/// Turns raw declared values into resolved values.
pub trait ValueCoercion {
    /// Coerce `raw`, declared for `property`.
    ///
    /// `raw` is never a CSS-wide keyword; those are handled by the style tree.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidValue`] when `raw` has no meaning for `property`.
    fn coerce(
        &self,
        ctx: &CoercionContext<'_>,
        property: Property,
        raw: &SpecifiedValue,
    ) -> Result<ResolvedValue, StyleError>;
}

/// The bundled coercion rules for the CSS 2.1 longhands plus the paged-media
/// extensions the engine recognizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssCoercion;

impl ValueCoercion for CssCoercion {
    fn coerce(
        &self,
        ctx: &CoercionContext<'_>,
        property: Property,
        raw: &SpecifiedValue,
    ) -> Result<ResolvedValue, StyleError> {
        use Property as P;

        match property {
            P::Color
            | P::BackgroundColor
            | P::BorderTopColor
            | P::BorderRightColor
            | P::BorderBottomColor
            | P::BorderLeftColor => coerce_color(property, raw).map(ResolvedValue::Color),

            P::BorderTopWidth | P::BorderRightWidth | P::BorderBottomWidth | P::BorderLeftWidth => {
                coerce_border_width(property, raw)
            }

            P::MarginTop
            | P::MarginRight
            | P::MarginBottom
            | P::MarginLeft
            | P::PaddingTop
            | P::PaddingRight
            | P::PaddingBottom
            | P::PaddingLeft
            | P::Top
            | P::Right
            | P::Bottom
            | P::Left
            | P::Width
            | P::Height
            | P::MinWidth
            | P::MinHeight
            | P::MaxWidth
            | P::MaxHeight
            | P::TextIndent
            | P::LetterSpacing
            | P::WordSpacing
            | P::VerticalAlign => coerce_length_or_keyword(property, raw),

            P::FontSize => coerce_font_size(property, raw),
            P::FontWeight => coerce_font_weight(ctx, property, raw),
            P::FontFamily => coerce_font_family(property, raw),
            P::LineHeight => coerce_line_height(property, raw),

            P::Opacity | P::Orphans | P::Widows => coerce_number(property, raw),
            P::ZIndex => match raw {
                SpecifiedValue::Ident(_) => coerce_keyword(property, raw),
                _ => coerce_number(property, raw),
            },

            P::CounterReset => coerce_counters(property, raw, 0),
            P::CounterIncrement => coerce_counters(property, raw, 1),

            P::BackgroundImage => coerce_list(property, raw, coerce_image),
            P::BackgroundPosition => coerce_list(property, raw, coerce_position),
            P::BackgroundSize => coerce_list(property, raw, coerce_size),
            P::BackgroundRepeat => coerce_list(property, raw, coerce_keyword),

            P::Position => match raw {
                // [§ 5 Running elements](https://www.w3.org/TR/css-gcpm-3/#running-elements)
                // "position: running(custom-ident)"
                SpecifiedValue::Function { name, .. } if name.eq_ignore_ascii_case("running") => {
                    coerce_function(property, raw)
                }
                _ => coerce_keyword(property, raw),
            },

            P::TextDecoration => match raw {
                SpecifiedValue::List(_) => coerce_list(property, raw, coerce_keyword),
                _ => coerce_keyword(property, raw),
            },

            P::ListStyleImage => match raw {
                SpecifiedValue::Url(url) => Ok(ResolvedValue::Uri(url.clone())),
                _ => coerce_keyword(property, raw),
            },

            P::BackgroundAttachment
            | P::BorderCollapse
            | P::BorderTopStyle
            | P::BorderRightStyle
            | P::BorderBottomStyle
            | P::BorderLeftStyle
            | P::BoxSizing
            | P::CaptionSide
            | P::Clear
            | P::Direction
            | P::Display
            | P::EmptyCells
            | P::Float
            | P::FontStyle
            | P::FontVariant
            | P::FsTablePaginate
            | P::ListStylePosition
            | P::ListStyleType
            | P::Overflow
            | P::PageBreakAfter
            | P::PageBreakBefore
            | P::PageBreakInside
            | P::TableLayout
            | P::TextAlign
            | P::TextTransform
            | P::Visibility
            | P::WhiteSpace
            | P::WordWrap => coerce_keyword(property, raw),
        }
    }
}

fn unexpected(property: Property, expected: &str, raw: &SpecifiedValue) -> StyleError {
    StyleError::invalid(property, format!("expected {expected}, got a {}", raw.kind()))
}

/// [§ 4.3.1 Identifiers](https://www.w3.org/TR/CSS2/syndata.html#value-def-identifier)
fn coerce_keyword(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    let SpecifiedValue::Ident(keyword) = raw else {
        return Err(unexpected(property, "a keyword", raw));
    };
    Ident::from_str(keyword)
        .map(ResolvedValue::Ident)
        .map_err(|_| StyleError::invalid(property, format!("unknown keyword '{keyword}'")))
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by <length> in
/// the property definitions."
fn coerce_length(property: Property, raw: &SpecifiedValue) -> Result<LengthValue, StyleError> {
    match raw {
        SpecifiedValue::Dimension { value, unit } => LengthUnit::from_unit(unit)
            .map(|unit| LengthValue::new(*value, unit))
            .ok_or_else(|| StyleError::invalid(property, format!("unknown unit '{unit}'"))),
        SpecifiedValue::Percentage(value) => Ok(LengthValue::percent(*value)),
        // "0 can be written without a unit"
        SpecifiedValue::Number(value) if *value == 0.0 => Ok(LengthValue::px(0.0)),
        _ => Err(unexpected(property, "a length", raw)),
    }
}

fn coerce_length_or_keyword(
    property: Property,
    raw: &SpecifiedValue,
) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Ident(_) => coerce_keyword(property, raw),
        _ => coerce_length(property, raw).map(ResolvedValue::Length),
    }
}

/// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
///
/// "The interpretation of the first three values depends on the user agent."
/// Thin, medium and thick are 1px, 3px and 5px here.
fn coerce_border_width(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    let px = match raw.as_ident().map(Ident::from_str) {
        Some(Ok(Ident::Thin)) => 1.0,
        Some(Ok(Ident::Medium)) => 3.0,
        Some(Ok(Ident::Thick)) => 5.0,
        Some(_) => return Err(unexpected(property, "thin, medium, thick or a length", raw)),
        None => return coerce_length(property, raw).map(ResolvedValue::Length),
    };
    Ok(ResolvedValue::Length(LengthValue::px(px)))
}

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "Value: <absolute-size> | <relative-size> | <length> | <percentage> | inherit"
fn coerce_font_size(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Ident(_) => match coerce_keyword(property, raw)? {
            ResolvedValue::Ident(
                ident @ (Ident::XxSmall
                | Ident::XSmall
                | Ident::Small
                | Ident::Medium
                | Ident::Large
                | Ident::XLarge
                | Ident::XxLarge
                | Ident::Smaller
                | Ident::Larger),
            ) => Ok(ResolvedValue::Ident(ident)),
            _ => Err(unexpected(property, "a font size keyword", raw)),
        },
        _ => coerce_length(property, raw).map(ResolvedValue::Length),
    }
}

/// [§ 15.6 Font boldness](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
///
/// "'bolder' selects the next weight that is assigned to a font that is
/// darker than the inherited one. 'lighter' selects the next weight that is
/// assigned to a font that is lighter than the inherited one."
///
/// Weights are stored as numbers; the relative keywords are resolved here
/// against the parent's weight using the CSS Fonts 4 mapping table.
fn coerce_font_weight(
    ctx: &CoercionContext<'_>,
    property: Property,
    raw: &SpecifiedValue,
) -> Result<ResolvedValue, StyleError> {
    let inherited = || {
        ctx.parent()
            .and_then(|parent| parent.number(Property::FontWeight))
            .unwrap_or(400.0)
    };
    let weight = match raw {
        SpecifiedValue::Number(weight) if (1.0..=1000.0).contains(weight) => *weight,
        SpecifiedValue::Ident(_) => match coerce_keyword(property, raw)? {
            ResolvedValue::Ident(Ident::Normal) => 400.0,
            ResolvedValue::Ident(Ident::Bold) => 700.0,
            ResolvedValue::Ident(Ident::Bolder) => bolder(inherited()),
            ResolvedValue::Ident(Ident::Lighter) => lighter(inherited()),
            _ => return Err(unexpected(property, "a font weight", raw)),
        },
        _ => return Err(unexpected(property, "a font weight", raw)),
    };
    Ok(ResolvedValue::Number(weight))
}

// [§ 2.2.1 Relative Weights](https://www.w3.org/TR/css-fonts-4/#relative-weights)
fn bolder(inherited: f32) -> f32 {
    if inherited < 350.0 {
        400.0
    } else if inherited < 550.0 {
        700.0
    } else {
        900.0_f32.max(inherited)
    }
}

fn lighter(inherited: f32) -> f32 {
    if inherited < 100.0 {
        inherited
    } else if inherited < 550.0 {
        100.0
    } else if inherited < 750.0 {
        400.0
    } else {
        700.0
    }
}

/// [§ 15.3 Font family](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
///
/// "The property value is a prioritized list of font family names and/or
/// generic family names."
fn coerce_font_family(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    raw.items()
        .iter()
        .map(|item| match item {
            SpecifiedValue::Ident(name) | SpecifiedValue::Str(name) => Ok(name.clone()),
            other => Err(unexpected(property, "a family name", other)),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ResolvedValue::Strings)
}

/// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
///
/// "Value: normal | <number> | <length> | <percentage> | inherit"
fn coerce_line_height(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Ident(_) => coerce_keyword(property, raw),
        SpecifiedValue::Number(number) => Ok(ResolvedValue::Number(*number)),
        _ => coerce_length(property, raw).map(ResolvedValue::Length),
    }
}

fn coerce_number(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Number(number) => Ok(ResolvedValue::Number(*number)),
        _ => Err(unexpected(property, "a number", raw)),
    }
}

/// [§ 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-syntax)
fn coerce_color(property: Property, raw: &SpecifiedValue) -> Result<ColorValue, StyleError> {
    let color = match raw {
        SpecifiedValue::Hash(hex) => ColorValue::from_hex(hex),
        SpecifiedValue::Ident(name) => ColorValue::from_named(name),
        // [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#funcdef-rgb)
        SpecifiedValue::Function { name, args }
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            rgb_function(args)
        }
        _ => return Err(unexpected(property, "a color", raw)),
    };
    color.ok_or_else(|| StyleError::invalid(property, "malformed color"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rgb_function(args: &[SpecifiedValue]) -> Option<ColorValue> {
    let channel = |arg: &SpecifiedValue| match arg {
        SpecifiedValue::Number(value) => Some(value.clamp(0.0, 255.0).round() as u8),
        SpecifiedValue::Percentage(pct) => Some((pct.clamp(0.0, 100.0) * 2.55).round() as u8),
        _ => None,
    };
    // "<alpha-value> = <number> | <percentage>", 0 to 1
    let alpha = |arg: &SpecifiedValue| match arg {
        SpecifiedValue::Number(value) => Some((value.clamp(0.0, 1.0) * 255.0).round() as u8),
        SpecifiedValue::Percentage(pct) => Some((pct.clamp(0.0, 100.0) * 2.55).round() as u8),
        _ => None,
    };
    match args {
        [r, g, b] => Some(ColorValue::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Some(ColorValue {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
            a: alpha(a)?,
        }),
        _ => None,
    }
}

/// [§ 12.4 Automatic counters and numbering](https://www.w3.org/TR/CSS2/generate.html#counters)
///
/// "Value: [ <identifier> <integer>? ]+ | none | inherit"
///
/// A name without an integer takes `default` (0 for `counter-reset`, 1 for
/// `counter-increment`).
#[allow(clippy::cast_possible_truncation)]
fn coerce_counters(
    property: Property,
    raw: &SpecifiedValue,
    default: i32,
) -> Result<ResolvedValue, StyleError> {
    if raw.as_ident().is_some_and(|name| name.eq_ignore_ascii_case("none")) {
        return Ok(ResolvedValue::Counters(Vec::new()));
    }

    let mut counters: Vec<CounterData> = Vec::new();
    for item in raw.items() {
        match item {
            SpecifiedValue::Ident(name) => counters.push(CounterData {
                name: name.clone(),
                value: default,
            }),
            SpecifiedValue::Number(value) => match counters.last_mut() {
                Some(last) => last.value = value.round() as i32,
                None => return Err(unexpected(property, "a counter name", item)),
            },
            other => return Err(unexpected(property, "a counter name or integer", other)),
        }
    }
    Ok(ResolvedValue::Counters(counters))
}

/// Coerce every comma-separated layer of a list-valued property.
fn coerce_list(
    property: Property,
    raw: &SpecifiedValue,
    item: fn(Property, &SpecifiedValue) -> Result<ResolvedValue, StyleError>,
) -> Result<ResolvedValue, StyleError> {
    raw.items()
        .iter()
        .map(|layer| item(property, layer))
        .collect::<Result<Vec<_>, _>>()
        .map(ResolvedValue::List)
}

/// [§ 3.3 'background-image'](https://www.w3.org/TR/css-backgrounds-3/#background-image)
///
/// "<bg-image> = <image> | none"
fn coerce_image(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Url(url) => Ok(ResolvedValue::Uri(url.clone())),
        SpecifiedValue::Function { .. } => coerce_function(property, raw),
        _ => coerce_keyword(property, raw),
    }
}

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
///
/// "If only one value is specified, the second value is assumed to be
/// 'center'." Keywords become percentages: left and top are 0%, center is
/// 50%, right and bottom are 100%. A layer resolves to a two-element list,
/// horizontal first.
fn coerce_position(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    let components = raw.items();
    let (first, second) = match components {
        [only] => (only, None),
        [first, second] => (first, Some(second)),
        _ => return Err(unexpected(property, "one or two position components", raw)),
    };

    let keyword = |value: &SpecifiedValue| value.as_ident().and_then(|k| Ident::from_str(k).ok());
    let is_vertical = |value: &SpecifiedValue| matches!(keyword(value), Some(Ident::Top | Ident::Bottom));
    let is_horizontal =
        |value: &SpecifiedValue| matches!(keyword(value), Some(Ident::Left | Ident::Right));

    // "top left" is the same as "left top".
    let (horizontal, vertical) = match second {
        Some(second) if is_vertical(first) || is_horizontal(second) => (Some(second), Some(first)),
        Some(second) => (Some(first), Some(second)),
        None if is_vertical(first) => (None, Some(first)),
        None => (Some(first), None),
    };

    let component = |value: Option<&SpecifiedValue>| -> Result<ResolvedValue, StyleError> {
        let Some(value) = value else {
            return Ok(ResolvedValue::Length(LengthValue::percent(50.0)));
        };
        let length = match keyword(value) {
            Some(Ident::Left | Ident::Top) => LengthValue::percent(0.0),
            Some(Ident::Center) => LengthValue::percent(50.0),
            Some(Ident::Right | Ident::Bottom) => LengthValue::percent(100.0),
            Some(_) => return Err(unexpected(property, "a position keyword", value)),
            None => coerce_length(property, value)?,
        };
        Ok(ResolvedValue::Length(length))
    };

    Ok(ResolvedValue::List(vec![
        component(horizontal)?,
        component(vertical)?,
    ]))
}

/// [§ 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
///
/// "<bg-size> = [ <length-percentage [0,∞]> | auto ]{1,2} | cover | contain"
///
/// `cover` and `contain` resolve to a single keyword; everything else to a
/// width/height pair, the height defaulting to `auto`.
fn coerce_size(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    let component = |value: &SpecifiedValue| coerce_length_or_keyword(property, value);
    match raw.items() {
        [only] => match component(only)? {
            cover @ ResolvedValue::Ident(Ident::Cover | Ident::Contain) => Ok(cover),
            width => Ok(ResolvedValue::List(vec![
                width,
                ResolvedValue::Ident(Ident::Auto),
            ])),
        },
        [width, height] => Ok(ResolvedValue::List(vec![
            component(width)?,
            component(height)?,
        ])),
        _ => Err(unexpected(property, "one or two size components", raw)),
    }
}

/// Coerce a functional notation, keeping its arguments in a generic shape.
fn coerce_function(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    let SpecifiedValue::Function { name, args } = raw else {
        return Err(unexpected(property, "a function", raw));
    };
    Ok(ResolvedValue::Function(FunctionValue {
        name: name.to_ascii_lowercase(),
        args: args
            .iter()
            .map(|arg| coerce_argument(property, arg))
            .collect::<Result<_, _>>()?,
    }))
}

/// Function arguments have no per-property grammar here. Known keywords stay
/// keywords, color names become colors, and any other identifier (a running
/// element name, for instance) is kept as a string.
fn coerce_argument(property: Property, raw: &SpecifiedValue) -> Result<ResolvedValue, StyleError> {
    match raw {
        SpecifiedValue::Ident(name) => Ok(Ident::from_str(name).map_or_else(
            |_| {
                ColorValue::from_named(name).map_or_else(
                    || ResolvedValue::Strings(vec![name.clone()]),
                    ResolvedValue::Color,
                )
            },
            ResolvedValue::Ident,
        )),
        SpecifiedValue::Str(text) => Ok(ResolvedValue::Strings(vec![text.clone()])),
        SpecifiedValue::Number(number) => Ok(ResolvedValue::Number(*number)),
        SpecifiedValue::Percentage(_) | SpecifiedValue::Dimension { .. } => {
            coerce_length(property, raw).map(ResolvedValue::Length)
        }
        SpecifiedValue::Hash(_) => coerce_color(property, raw).map(ResolvedValue::Color),
        SpecifiedValue::Url(url) => Ok(ResolvedValue::Uri(url.clone())),
        SpecifiedValue::Function { name, .. }
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            coerce_color(property, raw).map(ResolvedValue::Color)
        }
        SpecifiedValue::Function { .. } => coerce_function(property, raw),
        SpecifiedValue::List(items) => items
            .iter()
            .map(|item| coerce_argument(property, item))
            .collect::<Result<Vec<_>, _>>()
            .map(ResolvedValue::List),
        SpecifiedValue::Inherit | SpecifiedValue::Initial => {
            Err(unexpected(property, "a function argument", raw))
        }
    }
}
