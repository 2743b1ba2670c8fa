//! Font specification, font size keywords and line height.
//!
//! [§ 15 Fonts](https://www.w3.org/TR/CSS2/fonts.html)

use std::rc::Rc;

use serde::Serialize;

use crate::context::{FontMetrics, RenderContext, ResolvedFont};
use crate::property::Property;
use crate::style::Style;
use crate::value::{Ident, ResolvedValue};

/// Everything a font backend needs to pick a concrete font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpecification {
    /// `font-family`, in priority order.
    pub families: Vec<String>,
    /// Used font size, in device units.
    pub size: f32,
    /// Numeric `font-weight`, 1..=1000.
    pub weight: u16,
    /// `font-style`: normal, italic or oblique.
    pub style: Ident,
    /// `font-variant`: normal or small-caps.
    pub variant: Ident,
}

/// The absolute-size keywords, smallest first.
const ABSOLUTE_SIZES: [Ident; 7] = [
    Ident::XxSmall,
    Ident::XSmall,
    Ident::Small,
    Ident::Medium,
    Ident::Large,
    Ident::XLarge,
    Ident::XxLarge,
];

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "<absolute-size>: An <absolute-size> keyword is an index to a table of
/// font sizes computed and kept by the UA."
///
/// "<relative-size>: A <relative-size> keyword is interpreted relative to
/// the table of font sizes and the font size of the parent element."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSizeTable {
    /// CSS pixel sizes for `xx-small` through `xx-large`.
    pub proportional: [f32; 7],
    /// The same ladder for fonts whose first family is `monospace`.
    pub monospace: [f32; 7],
    /// Factor applied to the parent size for `smaller` with no absolute
    /// ancestor.
    pub smaller_factor: f32,
    /// Factor applied to the parent size for `larger` with no absolute
    /// ancestor.
    pub larger_factor: f32,
}

impl Default for FontSizeTable {
    fn default() -> Self {
        Self {
            proportional: [9.0, 10.0, 13.0, 16.0, 18.0, 24.0, 32.0],
            monospace: [9.0, 10.0, 12.0, 13.0, 16.0, 20.0, 26.0],
            smaller_factor: 0.8,
            larger_factor: 1.2,
        }
    }
}

impl FontSizeTable {
    fn position(ident: Ident) -> Option<usize> {
        ABSOLUTE_SIZES.iter().position(|&size| size == ident)
    }

    /// Whether `ident` is an absolute-size keyword.
    #[must_use]
    pub fn is_absolute(&self, ident: Ident) -> bool {
        Self::position(ident).is_some()
    }

    /// One step down the ladder, stopping at `xx-small`.
    #[must_use]
    pub fn next_smaller(&self, ident: Ident) -> Ident {
        Self::position(ident).map_or(ident, |index| ABSOLUTE_SIZES[index.saturating_sub(1)])
    }

    /// One step up the ladder, stopping at `xx-large`.
    #[must_use]
    pub fn next_larger(&self, ident: Ident) -> Ident {
        Self::position(ident).map_or(ident, |index| {
            ABSOLUTE_SIZES[(index + 1).min(ABSOLUTE_SIZES.len() - 1)]
        })
    }

    /// CSS pixel size of an absolute-size keyword.
    #[must_use]
    pub fn absolute_size_px(&self, ident: Ident, monospace: bool) -> Option<f32> {
        let table = if monospace {
            &self.monospace
        } else {
            &self.proportional
        };
        Self::position(ident).map(|index| table[index])
    }

    /// Factor for a relative-size keyword when no ancestor anchors it to the
    /// ladder.
    #[must_use]
    pub const fn default_relative_factor(&self, ident: Ident) -> Option<f32> {
        match ident {
            Ident::Smaller => Some(self.smaller_factor),
            Ident::Larger => Some(self.larger_factor),
            _ => None,
        }
    }
}

impl Style<'_> {
    /// The font specification, computed once.
    #[must_use]
    pub fn font(self, ctx: &RenderContext<'_>) -> Rc<FontSpecification> {
        Rc::clone(
            self.node()
                .caches
                .font
                .get_or_init(|| Rc::new(self.compute_font(ctx))),
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn compute_font(self, ctx: &RenderContext<'_>) -> FontSpecification {
        let families = self.strings(Property::FontFamily);
        let size = self.font_size(&families, ctx);
        let weight = self
            .number(Property::FontWeight)
            .unwrap_or(400.0)
            .clamp(1.0, 1000.0)
            .round() as u16;
        let spec = FontSpecification {
            families,
            size,
            weight,
            style: self.ident(Property::FontStyle).unwrap_or(Ident::Normal),
            variant: self.ident(Property::FontVariant).unwrap_or(Ident::Normal),
        };
        log::trace!("font for {:?}: {spec:?}", self.id());
        spec
    }

    /// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
    ///
    /// "Note 2. Only the computed value is inherited." A size shared with the
    /// parent is the parent's used size, so `em` and `smaller` do not
    /// compound down the tree.
    fn font_size(self, families: &[String], ctx: &RenderContext<'_>) -> f32 {
        if let Some(parent) = self
            .parent()
            .filter(|_| self.shares_parent_value(Property::FontSize))
        {
            return parent.font(ctx).size;
        }

        match &*self.resolve(Property::FontSize) {
            ResolvedValue::Ident(ident) => {
                let table = &self.tree.font_sizes;
                let monospace = families
                    .first()
                    .is_some_and(|family| family.eq_ignore_ascii_case("monospace"));
                if let Some(px) = self
                    .absolute_font_size()
                    .and_then(|anchor| table.absolute_size_px(anchor, monospace))
                {
                    return px * ctx.dots_per_px;
                }
                // No absolute ancestor: fall back to a plain factor.
                table.default_relative_factor(*ident).unwrap_or(1.0) * self.parent_font_size(ctx)
            }
            ResolvedValue::Length(length) => {
                self.length_to_device(Property::FontSize, *length, 0.0, ctx)
            }
            _ => self.parent_font_size(ctx),
        }
    }

    /// The absolute-size keyword this style's `font-size` lands on, walking
    /// `smaller`/`larger` steps up to the nearest ancestor with an absolute
    /// keyword.
    fn absolute_font_size(self) -> Option<Ident> {
        if self.shares_parent_value(Property::FontSize) {
            return self.parent()?.absolute_font_size();
        }
        let table = &self.tree.font_sizes;
        match self.ident(Property::FontSize)? {
            ident if table.is_absolute(ident) => Some(ident),
            Ident::Smaller => self
                .parent()?
                .absolute_font_size()
                .map(|anchor| table.next_smaller(anchor)),
            Ident::Larger => self
                .parent()?
                .absolute_font_size()
                .map(|anchor| table.next_larger(anchor)),
            _ => None,
        }
    }

    /// The concrete font the font context picked, computed once.
    #[must_use]
    pub fn resolved_font(self, ctx: &RenderContext<'_>) -> Rc<ResolvedFont> {
        Rc::clone(
            self.node()
                .caches
                .resolved_font
                .get_or_init(|| Rc::new(ctx.fonts.resolve_font(&self.font(ctx)))),
        )
    }

    /// Metrics of [`Style::resolved_font`], computed once.
    #[must_use]
    pub fn font_metrics(self, ctx: &RenderContext<'_>) -> FontMetrics {
        *self
            .node()
            .caches
            .font_metrics
            .get_or_init(|| ctx.fonts.metrics(&self.resolved_font(ctx)))
    }

    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
    ///
    /// "normal: Tells user agents to set the used value to a 'reasonable'
    /// value based on the font of the element." That is the larger of
    /// 1.1 times the font size and the font's own ascent plus descent.
    ///
    /// "<number>: The used value of the property is this number multiplied
    /// by the element's font size."
    #[must_use]
    pub fn line_height(self, ctx: &RenderContext<'_>) -> f32 {
        *self
            .node()
            .caches
            .line_height
            .get_or_init(|| self.compute_line_height(ctx))
    }

    fn compute_line_height(self, ctx: &RenderContext<'_>) -> f32 {
        match &*self.resolve(Property::LineHeight) {
            ResolvedValue::Length(length) => match self.parent() {
                // "<length> / <percentage>: the computed value is inherited"
                Some(parent) if self.shares_parent_value(Property::LineHeight) => {
                    parent.line_height(ctx)
                }
                _ => self.length_to_device(Property::LineHeight, *length, 0.0, ctx),
            },
            ResolvedValue::Number(number) => self.font(ctx).size * number,
            _ => {
                let size = self.font(ctx).size;
                let metrics = self.font_metrics(ctx);
                (size * 1.1).max((metrics.ascent + metrics.descent).ceil())
            }
        }
    }
}
