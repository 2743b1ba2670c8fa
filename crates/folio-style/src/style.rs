//! Property resolution on a finished style.
//!
//! [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
//!
//! "Unless otherwise specified, the computed value of an inherited property is
//! the computed value of the parent element; the initial value of a
//! non-inherited property is used when no value is specified."

use std::collections::BTreeMap;
use std::rc::Rc;

use folio_common::warning::warn_once;
use serde::Serialize;

use crate::context::RenderContext;
use crate::error::StyleError;
use crate::property::Property;
use crate::tree::{MaterializedInitial, StyleId, StyleNode, StyleTree};
use crate::value::{
    ColorValue, CounterData, DEFAULT_FONT_SIZE_PX, Ident, LengthUnit, LengthValue, ResolvedValue,
};

/// A query handle for one style in a [`StyleTree`].
///
/// Handles are cheap to copy. All lookups memoize into the style's property
/// table or derived caches, which is why they only need a shared borrow of the
/// tree.
#[derive(Clone, Copy)]
pub struct Style<'a> {
    pub(crate) tree: &'a StyleTree,
    id: StyleId,
}

impl std::fmt::Debug for Style<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Style").field(&self.id).finish()
    }
}

impl PartialEq for Style<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Style<'_> {}

impl<'a> Style<'a> {
    pub(crate) const fn new(tree: &'a StyleTree, id: StyleId) -> Self {
        Self { tree, id }
    }

    pub(crate) fn node(self) -> &'a StyleNode {
        self.tree.node(self.id)
    }

    /// The arena index of this style.
    #[must_use]
    pub const fn id(self) -> StyleId {
        self.id
    }

    /// The style this one inherits from, if any.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.node().parent.map(|id| self.tree.style(id))
    }

    /// Number of distinct children derived from this style so far.
    #[must_use]
    pub fn children_len(self) -> usize {
        self.node().children.len()
    }

    /// [§ 6.1 Specified values](https://www.w3.org/TR/CSS2/cascade.html#specified-value)
    ///
    /// "1. If the cascade results in a value, use it.
    ///  2. Otherwise, if the property is inherited and the element is not the
    ///     root of the document tree, use the computed value of the parent
    ///     element.
    ///  3. Otherwise use the property's initial value."
    ///
    /// The answer is stored in this style's table, so each ancestor chain is
    /// walked at most once per style and property, and repeated calls return
    /// the same `Rc`.
    #[must_use]
    pub fn resolve(self, property: Property) -> Rc<ResolvedValue> {
        let values = &self.node().values;
        if let Some(value) = values.get(property) {
            return Rc::clone(value);
        }

        let inherited = if !values.needs_initial(property) && self.tree.registry.inherits(property)
        {
            self.parent().map(|parent| parent.resolve(property))
        } else {
            None
        };
        let value = inherited.unwrap_or_else(|| self.initial_value(property));
        values.memoize(property, value)
    }

    /// The initial value of `property` for this style, following
    /// `=other-property` aliases.
    fn initial_value(self, property: Property) -> Rc<ResolvedValue> {
        match &self.tree.initials[property.id()] {
            MaterializedInitial::Value(value) => Rc::clone(value),
            MaterializedInitial::Alias(other) => self.resolve(*other),
        }
    }

    /// Whether this style's value for `property` is the very value its parent
    /// holds (inherited implicitly or through `inherit`).
    pub(crate) fn shares_parent_value(self, property: Property) -> bool {
        self.parent()
            .is_some_and(|parent| Rc::ptr_eq(&self.resolve(property), &parent.resolve(property)))
    }

    /// The resolved keyword of `property`, if it resolved to one.
    #[must_use]
    pub fn ident(self, property: Property) -> Option<Ident> {
        self.resolve(property).as_ident()
    }

    /// Whether `property` resolved to the keyword `ident`.
    #[must_use]
    pub fn is_ident(self, property: Property, ident: Ident) -> bool {
        self.ident(property) == Some(ident)
    }

    /// The resolved color of `property`, if it resolved to one.
    #[must_use]
    pub fn color(self, property: Property) -> Option<ColorValue> {
        self.resolve(property).as_color()
    }

    /// The resolved number of `property`, if it resolved to one.
    #[must_use]
    pub fn number(self, property: Property) -> Option<f32> {
        self.resolve(property).as_number()
    }

    /// The resolved string list of `property` (`font-family`), empty for any
    /// other shape.
    #[must_use]
    pub fn strings(self, property: Property) -> Vec<String> {
        self.resolve(property)
            .as_strings()
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    /// [§ 12.4 Automatic counters](https://www.w3.org/TR/CSS2/generate.html#counters)
    #[must_use]
    pub fn counter_reset(self) -> Vec<CounterData> {
        self.counters(Property::CounterReset)
    }

    /// [§ 12.4 Automatic counters](https://www.w3.org/TR/CSS2/generate.html#counters)
    #[must_use]
    pub fn counter_increment(self) -> Vec<CounterData> {
        self.counters(Property::CounterIncrement)
    }

    fn counters(self, property: Property) -> Vec<CounterData> {
        self.resolve(property)
            .as_counters()
            .map(<[CounterData]>::to_vec)
            .unwrap_or_default()
    }

    /// Whether `property` is expressed in a fixed unit.
    ///
    /// This is a best-effort hint for layout heuristics: values whose shape
    /// has no notion of a unit are logged and reported as not absolute.
    #[must_use]
    pub fn has_absolute_unit(self, property: Property) -> bool {
        match self.resolve(property).has_absolute_unit(property) {
            Ok(absolute) => absolute,
            Err(err) => {
                warn_once(
                    "style",
                    &format!(
                        "{err}; can't tell whether it is an absolute unit, assuming it is not"
                    ),
                );
                false
            }
        }
    }

    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// Resolve `property` to device units. Percentages refer to `base`, except
    /// for `font-size` (the parent's font size), `line-height` (the element's
    /// font size) and `vertical-align` (the parent's line height). Bare numbers
    /// are returned unchanged; keywords such as `auto` resolve to 0.
    #[must_use]
    pub fn length_in_device_units(
        self,
        property: Property,
        base: f32,
        ctx: &RenderContext<'_>,
    ) -> f32 {
        match &*self.resolve(property) {
            ResolvedValue::Length(length) => self.length_to_device(property, *length, base, ctx),
            ResolvedValue::Number(number) => *number,
            _ => 0.0,
        }
    }

    pub(crate) fn length_to_device(
        self,
        property: Property,
        length: LengthValue,
        base: f32,
        ctx: &RenderContext<'_>,
    ) -> f32 {
        match length.unit {
            // [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
            // "When specified in the font-size property of an element, they
            // refer to the computed font metrics of the parent element"
            LengthUnit::Em => length.value * self.em_basis(property, ctx),
            LengthUnit::Ex => length.value * self.ex_basis(property, ctx),
            LengthUnit::Percent => {
                let base = match property {
                    Property::FontSize => self.parent_font_size(ctx),
                    Property::LineHeight => self.font(ctx).size,
                    Property::VerticalAlign => self
                        .parent()
                        .map_or_else(|| self.line_height(ctx), |parent| parent.line_height(ctx)),
                    _ => base,
                };
                base * length.value / 100.0
            }
            LengthUnit::Px
            | LengthUnit::Pt
            | LengthUnit::Pc
            | LengthUnit::In
            | LengthUnit::Cm
            | LengthUnit::Mm => length.to_px().unwrap_or(length.value) * ctx.dots_per_px,
        }
    }

    fn em_basis(self, property: Property, ctx: &RenderContext<'_>) -> f32 {
        if property == Property::FontSize {
            self.parent_font_size(ctx)
        } else {
            self.font(ctx).size
        }
    }

    fn ex_basis(self, property: Property, ctx: &RenderContext<'_>) -> f32 {
        if property == Property::FontSize {
            self.parent().map_or(
                DEFAULT_FONT_SIZE_PX * ctx.dots_per_px * 0.5,
                |parent| parent.font_metrics(ctx).x_height,
            )
        } else {
            self.font_metrics(ctx).x_height
        }
    }

    /// The parent's font size in device units, or `medium` at the root.
    pub(crate) fn parent_font_size(self, ctx: &RenderContext<'_>) -> f32 {
        self.parent()
            .map_or(DEFAULT_FONT_SIZE_PX * ctx.dots_per_px, |parent| {
                parent.font(ctx).size
            })
    }

    /// Every property's resolved value, keyed by CSS name.
    #[must_use]
    pub fn snapshot(self) -> StyleSnapshot {
        StyleSnapshot {
            properties: Property::all()
                .map(|property| (property.name(), (*self.resolve(property)).clone()))
                .collect(),
        }
    }

    /// [`Style::snapshot`] as pretty-printed JSON, for debugging dumps.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn to_json(self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

/// A serializable copy of every resolved value of one style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSnapshot {
    /// Resolved values keyed by CSS property name.
    pub properties: BTreeMap<&'static str, ResolvedValue>,
}
