//! The property registry.
//!
//! [§ 6.1 Property definitions](https://www.w3.org/TR/CSS2/about.html#property-defs)
//!
//! "Each CSS property definition begins with a summary of key information"
//! including its initial value and whether it is inherited. This module holds
//! that summary for every longhand the engine recognizes, indexed by a dense
//! property id.

use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::error::StyleError;
use crate::value::SpecifiedValue;

/// A recognized longhand property.
///
/// Shorthands (`margin`, `border`, `background`, `font`) are expanded by the
/// upstream cascade and never reach this engine. The discriminant is the dense
/// property id used to index a [`PropertyTable`](crate::PropertyTable).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs, reason = "variants are the CSS property names")]
pub enum Property {
    BackgroundAttachment,
    BackgroundColor,
    BackgroundImage,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    BorderCollapse,
    BorderTopColor,
    BorderRightColor,
    BorderBottomColor,
    BorderLeftColor,
    BorderTopStyle,
    BorderRightStyle,
    BorderBottomStyle,
    BorderLeftStyle,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    Bottom,
    BoxSizing,
    CaptionSide,
    Clear,
    Color,
    CounterIncrement,
    CounterReset,
    Direction,
    Display,
    EmptyCells,
    Float,
    FontFamily,
    FontSize,
    FontStyle,
    FontVariant,
    FontWeight,
    #[strum(serialize = "-fs-table-paginate")]
    #[serde(rename = "-fs-table-paginate")]
    FsTablePaginate,
    Height,
    Left,
    LetterSpacing,
    LineHeight,
    ListStyleImage,
    ListStylePosition,
    ListStyleType,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MaxHeight,
    MaxWidth,
    MinHeight,
    MinWidth,
    Opacity,
    Orphans,
    Overflow,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    PageBreakAfter,
    PageBreakBefore,
    PageBreakInside,
    Position,
    Right,
    TableLayout,
    TextAlign,
    TextDecoration,
    TextIndent,
    TextTransform,
    Top,
    VerticalAlign,
    Visibility,
    WhiteSpace,
    Widows,
    Width,
    WordSpacing,
    WordWrap,
    ZIndex,
}

impl Property {
    /// The dense property id, in `0..Property::COUNT`.
    #[must_use]
    pub const fn id(self) -> usize {
        self as usize
    }

    /// The CSS name of the property.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Every recognized property, in id order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// The four physical longhands behind one box-model shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideProperties {
    /// The `*-top` longhand.
    pub top: Property,
    /// The `*-right` longhand.
    pub right: Property,
    /// The `*-bottom` longhand.
    pub bottom: Property,
    /// The `*-left` longhand.
    pub left: Property,
}

impl SideProperties {
    /// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
    pub const MARGIN: Self = Self {
        top: Property::MarginTop,
        right: Property::MarginRight,
        bottom: Property::MarginBottom,
        left: Property::MarginLeft,
    };

    /// [§ 8.4 Padding properties](https://www.w3.org/TR/CSS2/box.html#padding-properties)
    pub const PADDING: Self = Self {
        top: Property::PaddingTop,
        right: Property::PaddingRight,
        bottom: Property::PaddingBottom,
        left: Property::PaddingLeft,
    };

    /// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
    pub const BORDER_WIDTH: Self = Self {
        top: Property::BorderTopWidth,
        right: Property::BorderRightWidth,
        bottom: Property::BorderBottomWidth,
        left: Property::BorderLeftWidth,
    };

    /// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
    pub const BORDER_STYLE: Self = Self {
        top: Property::BorderTopStyle,
        right: Property::BorderRightStyle,
        bottom: Property::BorderBottomStyle,
        left: Property::BorderLeftStyle,
    };

    /// [§ 8.5.2 Border color](https://www.w3.org/TR/CSS2/box.html#border-color-properties)
    pub const BORDER_COLOR: Self = Self {
        top: Property::BorderTopColor,
        right: Property::BorderRightColor,
        bottom: Property::BorderBottomColor,
        left: Property::BorderLeftColor,
    };

    /// The longhands in top, right, bottom, left order.
    #[must_use]
    pub const fn as_array(&self) -> [Property; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// [§ 6.1.1 Specified values](https://www.w3.org/TR/CSS2/cascade.html#specified-value)
///
/// "If the property is not inherited, the value will be set to the initial
/// value, which is specified in each property's definition."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InitialValue {
    /// A literal value, materialized once through the coercion service.
    Literal(SpecifiedValue),
    /// "Same as another property": the node's own resolved value of that
    /// property (`border-top-color` starts out as `color`).
    Alias(Property),
}

/// Registry entry for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyInfo {
    /// "Inherited: yes"
    pub inherits: bool,
    /// The initial value, if one has been registered.
    pub initial: Option<InitialValue>,
}

/// Per-property inheritance flags and initial values, indexed by property id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRegistry {
    entries: Vec<PropertyInfo>,
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::css()
    }
}

impl PropertyRegistry {
    /// The standard table: CSS 2.1 property definitions plus the paged-media
    /// and background extensions the engine recognizes.
    #[must_use]
    pub fn css() -> Self {
        let entries = Property::all()
            .map(|property| PropertyInfo {
                inherits: css_inherits(property),
                initial: Some(css_initial(property)),
            })
            .collect();
        Self { entries }
    }

    /// Whether `property` inherits from the parent style when undeclared.
    #[must_use]
    pub fn inherits(&self, property: Property) -> bool {
        self.entries[property.id()].inherits
    }

    /// The registered initial value of `property`.
    #[must_use]
    pub fn initial(&self, property: Property) -> Option<&InitialValue> {
        self.entries[property.id()].initial.as_ref()
    }

    /// The full registry entry of `property`.
    #[must_use]
    pub fn info(&self, property: Property) -> &PropertyInfo {
        &self.entries[property.id()]
    }

    /// Override the inheritance flag of one property.
    #[must_use]
    pub fn with_inherits(mut self, property: Property, inherits: bool) -> Self {
        self.entries[property.id()].inherits = inherits;
        self
    }

    /// Override the initial value of one property.
    #[must_use]
    pub fn with_initial(mut self, property: Property, initial: InitialValue) -> Self {
        self.entries[property.id()].initial = Some(initial);
        self
    }

    /// Remove the initial value of one property, leaving the registry broken.
    #[must_use]
    pub fn without_initial(mut self, property: Property) -> Self {
        self.entries[property.id()].initial = None;
        self
    }

    /// Check that every property has an initial value and that every
    /// `=other-property` chain ends in a literal.
    ///
    /// # Errors
    ///
    /// [`StyleError::MissingInitialValue`] for the first property without an
    /// initial value, [`StyleError::AliasCycle`] for the first alias chain that
    /// revisits a property.
    pub fn validate(&self) -> Result<(), StyleError> {
        for property in Property::all() {
            let mut current = property;
            let mut steps = 0;
            loop {
                match self.initial(current) {
                    None => return Err(StyleError::MissingInitialValue(current)),
                    Some(InitialValue::Literal(_)) => break,
                    Some(InitialValue::Alias(next)) => {
                        steps += 1;
                        if steps > Property::COUNT {
                            return Err(StyleError::AliasCycle(property));
                        }
                        current = *next;
                    }
                }
            }
        }
        Ok(())
    }
}

/// "Inherited: yes" column of the CSS 2.1 property index.
const fn css_inherits(property: Property) -> bool {
    use Property as P;
    matches!(
        property,
        P::BorderCollapse
            | P::CaptionSide
            | P::Color
            | P::Direction
            | P::EmptyCells
            | P::FontFamily
            | P::FontSize
            | P::FontStyle
            | P::FontVariant
            | P::FontWeight
            | P::LetterSpacing
            | P::LineHeight
            | P::ListStyleImage
            | P::ListStylePosition
            | P::ListStyleType
            | P::Orphans
            | P::TextAlign
            | P::TextIndent
            | P::TextTransform
            | P::Visibility
            | P::WhiteSpace
            | P::Widows
            | P::WordSpacing
            | P::WordWrap
    )
}

/// "Initial:" column of the CSS 2.1 property index.
fn css_initial(property: Property) -> InitialValue {
    use InitialValue::{Alias, Literal};
    use Property as P;
    use SpecifiedValue as V;

    match property {
        P::BackgroundAttachment => Literal(V::ident("scroll")),
        P::BackgroundColor => Literal(V::ident("transparent")),
        P::BackgroundImage => Literal(V::List(vec![V::ident("none")])),
        P::BackgroundPosition => Literal(V::List(vec![V::List(vec![
            V::Percentage(0.0),
            V::Percentage(0.0),
        ])])),
        P::BackgroundRepeat => Literal(V::List(vec![V::ident("repeat")])),
        P::BackgroundSize => Literal(V::List(vec![V::List(vec![
            V::ident("auto"),
            V::ident("auto"),
        ])])),
        P::BorderCollapse => Literal(V::ident("separate")),
        P::BorderTopColor | P::BorderRightColor | P::BorderBottomColor | P::BorderLeftColor => {
            Alias(P::Color)
        }
        P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle => {
            Literal(V::ident("none"))
        }
        P::BorderTopWidth | P::BorderRightWidth | P::BorderBottomWidth | P::BorderLeftWidth => {
            Literal(V::ident("medium"))
        }
        P::BoxSizing => Literal(V::ident("content-box")),
        P::CaptionSide => Literal(V::ident("top")),
        P::Color => Literal(V::ident("black")),
        P::CounterIncrement | P::CounterReset => Literal(V::ident("none")),
        P::Direction => Literal(V::ident("ltr")),
        P::Display => Literal(V::ident("inline")),
        P::EmptyCells => Literal(V::ident("show")),
        P::FontFamily => Literal(V::ident("serif")),
        P::FontSize => Literal(V::ident("medium")),
        P::FsTablePaginate | P::PageBreakAfter | P::PageBreakBefore | P::PageBreakInside => {
            Literal(V::ident("auto"))
        }
        P::Bottom | P::Height | P::Left | P::Right | P::Top | P::Width | P::ZIndex => {
            Literal(V::ident("auto"))
        }
        P::TableLayout => Literal(V::ident("auto")),
        P::LetterSpacing | P::WordSpacing | P::LineHeight | P::WordWrap | P::WhiteSpace => {
            Literal(V::ident("normal"))
        }
        P::FontStyle | P::FontVariant | P::FontWeight => Literal(V::ident("normal")),
        P::ListStyleImage | P::MaxHeight | P::MaxWidth => Literal(V::ident("none")),
        P::ListStylePosition => Literal(V::ident("outside")),
        P::ListStyleType => Literal(V::ident("disc")),
        P::MarginTop | P::MarginRight | P::MarginBottom | P::MarginLeft => Literal(V::Number(0.0)),
        P::PaddingTop | P::PaddingRight | P::PaddingBottom | P::PaddingLeft => {
            Literal(V::Number(0.0))
        }
        P::MinHeight | P::MinWidth | P::TextIndent => Literal(V::Number(0.0)),
        P::Opacity => Literal(V::Number(1.0)),
        P::Orphans | P::Widows => Literal(V::Number(2.0)),
        P::Overflow | P::Visibility => Literal(V::ident("visible")),
        P::Position => Literal(V::ident("static")),
        P::TextAlign => Literal(V::ident("left")),
        P::TextDecoration | P::TextTransform => Literal(V::ident("none")),
        P::VerticalAlign => Literal(V::ident("baseline")),
        P::Clear | P::Float => Literal(V::ident("none")),
    }
}
